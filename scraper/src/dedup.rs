use scout_common::{JobPosting, Lead};
use std::collections::HashSet;
use std::hash::Hash;

/// Identity key used to spot repeated items.
pub trait Identity {
    type Key: Eq + Hash;

    fn identity(&self) -> Self::Key;
}

impl Identity for JobPosting {
    type Key = (String, String, String);

    fn identity(&self) -> Self::Key {
        let (title, company, link) = self.key();
        (title.to_string(), company.to_string(), link.to_string())
    }
}

impl Identity for Lead {
    type Key = (String, String);

    fn identity(&self) -> Self::Key {
        let (company, email) = self.key();
        (company.to_string(), email.to_string())
    }
}

/// Drops every item whose key was already seen, keeping first-occurrence order.
pub fn dedupe<T: Identity>(items: Vec<T>) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.identity()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(title: &str, company: &str, link: &str) -> JobPosting {
        JobPosting::new(title, company, link, "Trabajo")
    }

    #[test]
    fn test_dedupe_keeps_first_occurrence_order() {
        let jobs = vec![
            job("Graphic Designer", "Acme", "https://a.com/1"),
            job("Logo Design", "", "https://a.com/2"),
            job("Graphic Designer", "Acme", "https://a.com/1").with_location("Nairobi"),
            job("Branding", "", "https://a.com/3"),
        ];
        let out = dedupe(jobs);
        let titles: Vec<_> = out.iter().map(|j| j.title.as_str()).collect();
        assert_eq!(titles, vec!["Graphic Designer", "Logo Design", "Branding"]);
        assert_eq!(out[0].location, "");
    }

    #[test]
    fn test_dedupe_is_idempotent_and_never_grows() {
        let jobs = vec![
            job("A", "x", "https://a.com/1"),
            job("A", "x", "https://a.com/1"),
            job("a", "x", "https://a.com/1"),
            job("A", "x", "https://a.com/2"),
        ];
        let once = dedupe(jobs.clone());
        assert!(once.len() <= jobs.len());
        assert_eq!(once.len(), 3);
        assert_eq!(dedupe(once.clone()), once);
    }

    #[test]
    fn test_dedupe_leads_by_company_and_email() {
        let leads = vec![
            Lead::new("", "hr@acme.com", "Trabajo", "https://a.com"),
            Lead::new("", "hr@acme.com", "Trabajo", "https://b.com"),
            Lead::new("Acme", "hr@acme.com", "Trabajo", "https://a.com"),
        ];
        assert_eq!(dedupe(leads).len(), 2);
    }
}
