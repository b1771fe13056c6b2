//! Sequential walk over the source list.
//!
//! One attempt per source, a polite pause between fetches, and no source
//! failure ever stops the run.

use crate::config::RunConfig;
use crate::dedup::dedupe;
use crate::extract::{Extraction, Page, Registry};
use crate::fetch::PageFetcher;
use crate::filter::filter_leads;
use log::{info, warn};
use scout_common::{JobPosting, Lead};
use std::thread;
use std::time::Duration;
use url::Url;

/// Everything collected in one run, in source order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Harvest {
    pub jobs: Vec<JobPosting>,
    pub leads: Vec<Lead>,
}

impl Harvest {
    /// Appends one source's results, deduplicated within that source only.
    pub fn absorb(&mut self, extraction: Extraction) {
        self.jobs.extend(dedupe(extraction.jobs));
        self.leads.extend(dedupe(extraction.leads));
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty() && self.leads.is_empty()
    }
}

pub struct Aggregator<'a, F: PageFetcher> {
    fetcher: &'a F,
    registry: &'a Registry,
    keywords: &'a [String],
    blocklist: &'a [String],
    polite_delay: Duration,
}

impl<'a, F: PageFetcher> Aggregator<'a, F> {
    pub fn new(fetcher: &'a F, registry: &'a Registry, config: &'a RunConfig) -> Self {
        Self {
            fetcher,
            registry,
            keywords: &config.keywords,
            blocklist: &config.lead_email_blocklist,
            polite_delay: config.polite_delay,
        }
    }

    pub fn run<S: AsRef<str>>(&self, urls: &[S]) -> Harvest {
        let mut harvest = Harvest::default();

        let mut fetched_any = false;
        for raw in urls {
            let raw = raw.as_ref();
            let url = match Url::parse(raw) {
                Ok(url) => url,
                Err(e) => {
                    warn!("❌ Skipping malformed source URL {}: {}", raw, e);
                    continue;
                }
            };

            // Pause only between real fetches.
            if fetched_any && !self.polite_delay.is_zero() {
                info!("⏳ Waiting {}ms before next source", self.polite_delay.as_millis());
                thread::sleep(self.polite_delay);
            }
            fetched_any = true;

            self.scrape_source(raw, &url, &mut harvest);
        }

        // Lead filtering is the only step applied across all sources.
        let before = harvest.leads.len();
        harvest.leads = filter_leads(std::mem::take(&mut harvest.leads), self.blocklist);
        info!(
            "📊 {} jobs, {} leads ({} leads blocklisted)",
            harvest.jobs.len(),
            harvest.leads.len(),
            before - harvest.leads.len()
        );

        harvest
    }

    fn scrape_source(&self, raw: &str, url: &Url, harvest: &mut Harvest) {
        let rule = self.registry.rule_for(url.host_str().unwrap_or_default());
        info!("📡 Fetching {} ({})", url, rule.name());

        let html = match self.fetcher.fetch(url) {
            Ok(html) => html,
            Err(e) => {
                warn!("❌ Error scraping {}: {}", url, e);
                return;
            }
        };

        let extraction = rule.extract(&Page::new(url, &html).listed_as(raw), self.keywords);
        info!(
            "✅ {}: {} jobs, {} leads from {} bytes",
            url,
            extraction.jobs.len(),
            extraction.leads.len(),
            html.len()
        );
        harvest.absorb(extraction);
    }
}
