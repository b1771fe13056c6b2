//! trabajo.org search results (list-item layout).

use super::{element_text, selector, Extraction, ExtractorRule, Page};
use crate::matcher::matches;
use scout_common::JobPosting;
use scraper::Selector;
use std::sync::LazyLock;

const SOURCE: &str = "Trabajo";

static JOB_LINKS: LazyLock<Selector> =
    LazyLock::new(|| selector("ul li a[href], .job-result a[href], a[href*='/job/']"));

pub struct TrabajoRule;

impl ExtractorRule for TrabajoRule {
    fn name(&self) -> &'static str {
        SOURCE
    }

    fn extract(&self, page: &Page<'_>, keywords: &[String]) -> Extraction {
        let Some(document) = page.parse() else {
            return Extraction::default();
        };

        let mut jobs = Vec::new();
        for link in document.select(&JOB_LINKS) {
            // Text pieces are glued without a separator on this site.
            let title = element_text(&link, "");
            if !matches(&title, keywords) {
                continue;
            }
            let Some(href) = page.resolve(&link) else {
                continue;
            };
            jobs.push(JobPosting::new(title, "", href.to_string(), SOURCE));
        }

        let leads = page.leads(&document, SOURCE);
        Extraction { jobs, leads }
    }
}
