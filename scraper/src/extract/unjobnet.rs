//! unjobnet.org (card layout).

use super::{element_text, selector, Extraction, ExtractorRule, Page};
use crate::matcher::matches;
use scout_common::JobPosting;
use scraper::Selector;
use std::sync::LazyLock;

const SOURCE: &str = "UNjobnet";

static CARDS: LazyLock<Selector> = LazyLock::new(|| selector("a.card, a[href*='/job/']"));

pub struct UnjobnetRule;

impl ExtractorRule for UnjobnetRule {
    fn name(&self) -> &'static str {
        SOURCE
    }

    fn extract(&self, page: &Page<'_>, keywords: &[String]) -> Extraction {
        let Some(document) = page.parse() else {
            return Extraction::default();
        };

        let jobs = document
            .select(&CARDS)
            .filter_map(|card| {
                let title = element_text(&card, " ");
                if !matches(&title, keywords) {
                    return None;
                }
                let href = page.resolve(&card)?;
                Some(JobPosting::new(title, "", href.to_string(), SOURCE))
            })
            .collect();

        let leads = page.leads(&document, SOURCE);
        Extraction { jobs, leads }
    }
}
