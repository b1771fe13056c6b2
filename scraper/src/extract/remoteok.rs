//! remoteok.com (tabular layout, one `tr.job` per listing).

use super::{enclosing, element_text, first_text, selector, Extraction, ExtractorRule, Page};
use crate::matcher::matches;
use scout_common::JobPosting;
use scraper::Selector;
use std::sync::LazyLock;

const SOURCE: &str = "RemoteOK";

static JOB_LINKS: LazyLock<Selector> = LazyLock::new(|| selector("tr.job a[href]"));
static JOB_ROW: LazyLock<Selector> = LazyLock::new(|| selector("tr.job"));
static COMPANY: LazyLock<Selector> = LazyLock::new(|| selector("td.company"));

pub struct RemoteOkRule;

impl ExtractorRule for RemoteOkRule {
    fn name(&self) -> &'static str {
        SOURCE
    }

    fn extract(&self, page: &Page<'_>, keywords: &[String]) -> Extraction {
        let Some(document) = page.parse() else {
            return Extraction::default();
        };

        let mut jobs = Vec::new();
        for link in document.select(&JOB_LINKS) {
            let title = element_text(&link, " ");
            if !matches(&title, keywords) {
                continue;
            }
            let Some(href) = page.resolve(&link) else {
                continue;
            };
            let company = enclosing(&link, &JOB_ROW)
                .map(|row| first_text(&row, &COMPANY))
                .unwrap_or_default();
            jobs.push(JobPosting::new(title, company, href.to_string(), SOURCE));
        }

        let leads = page.leads(&document, SOURCE);
        Extraction { jobs, leads }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    const HTML: &str = r#"
        <html><body><table>
          <tr class="job">
            <td class="company">Pixel Forge</td>
            <td><a href="/remote-jobs/1-senior-graphic-designer">Senior Graphic Designer</a></td>
          </tr>
          <tr class="job">
            <td><a href="/remote-jobs/2-devops">DevOps Engineer</a></td>
          </tr>
          <tr class="job">
            <td><a href="/remote-jobs/3-brand">Branding and Logo Design</a></td>
          </tr>
          <tr><td><a href="/remote-jobs/4">Graphic Designer outside a job row</a></td></tr>
        </table></body></html>"#;

    fn run() -> Extraction {
        let url = Url::parse("https://remoteok.com/remote-graphic+design-jobs").unwrap();
        let keywords = vec!["graphic designer".to_string(), "branding".to_string()];
        RemoteOkRule.extract(&Page::new(&url, HTML), &keywords)
    }

    #[test]
    fn test_only_job_rows_are_read() {
        let out = run();
        assert_eq!(out.jobs.len(), 2);
        assert_eq!(out.jobs[0].link, "https://remoteok.com/remote-jobs/1-senior-graphic-designer");
        assert_eq!(out.jobs[1].title, "Branding and Logo Design");
    }

    #[test]
    fn test_company_from_row_when_present() {
        let out = run();
        assert_eq!(out.jobs[0].company, "Pixel Forge");
        assert_eq!(out.jobs[1].company, "");
        assert!(out.leads.is_empty());
    }
}
