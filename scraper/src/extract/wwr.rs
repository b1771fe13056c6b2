//! weworkremotely.com (`li.feature` listing cards).

use super::{enclosing, element_text, first_text, selector, Extraction, ExtractorRule, Page};
use crate::matcher::matches;
use scout_common::JobPosting;
use scraper::Selector;
use std::sync::LazyLock;

const SOURCE: &str = "WeWorkRemotely";

static JOB_LINKS: LazyLock<Selector> = LazyLock::new(|| selector("li.feature a[href]"));
static LISTING: LazyLock<Selector> = LazyLock::new(|| selector("li.feature"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector(".new-listing__header__title"));
static COMPANY: LazyLock<Selector> = LazyLock::new(|| selector(".new-listing__company-name"));
static REGION: LazyLock<Selector> =
    LazyLock::new(|| selector(".new-listing__company-headquarters"));

pub struct WeWorkRemotelyRule;

impl ExtractorRule for WeWorkRemotelyRule {
    fn name(&self) -> &'static str {
        SOURCE
    }

    fn extract(&self, page: &Page<'_>, keywords: &[String]) -> Extraction {
        let Some(document) = page.parse() else {
            return Extraction::default();
        };

        let mut jobs = Vec::new();
        for link in document.select(&JOB_LINKS) {
            // Newer cards wrap the title in its own element; older ones are plain text.
            let title = match first_text(&link, &TITLE) {
                t if t.is_empty() => element_text(&link, " "),
                t => t,
            };
            if !matches(&title, keywords) {
                continue;
            }
            let Some(href) = page.resolve(&link) else {
                continue;
            };

            let (company, location) = enclosing(&link, &LISTING)
                .map(|card| (first_text(&card, &COMPANY), first_text(&card, &REGION)))
                .unwrap_or_default();

            jobs.push(JobPosting::new(title, company, href.to_string(), SOURCE).with_location(location));
        }

        let leads = page.leads(&document, SOURCE);
        Extraction { jobs, leads }
    }
}
