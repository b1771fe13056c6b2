//! Fallback for any host without a dedicated rule: every hyperlink on the page.

use super::{element_text, selector, Extraction, ExtractorRule, Page};
use crate::matcher::matches;
use scout_common::JobPosting;
use scraper::Selector;
use std::sync::LazyLock;

static LINKS: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));

/// Labels its results with the page host, e.g. `www.indeed.com`.
pub struct GenericRule;

impl ExtractorRule for GenericRule {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn extract(&self, page: &Page<'_>, keywords: &[String]) -> Extraction {
        let Some(document) = page.parse() else {
            return Extraction::default();
        };
        let source = page.url.host_str().unwrap_or_default();

        let mut jobs = Vec::new();
        for link in document.select(&LINKS) {
            let text = element_text(&link, " ");
            if !matches(&text, keywords) {
                continue;
            }
            match page.resolve(&link) {
                Some(href) if matches!(href.scheme(), "http" | "https") => {
                    jobs.push(JobPosting::new(text, "", href.to_string(), source));
                }
                _ => {}
            }
        }

        let leads = page.leads(&document, source);
        Extraction { jobs, leads }
    }
}
