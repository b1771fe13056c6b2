//! Graphic Design Job Scout
//!
//! One pass over the configured job boards: scrape, save CSVs under the
//! output directory and email the digest.

use chrono::{Local, Utc};
use job_scout::{
    logger, mailer, report, Aggregator, HttpFetcher, Registry, Result, RunConfig,
    DEFAULT_SOURCES,
};
use log::{error, info};

fn main() -> Result<()> {
    logger::init();
    info!("🔍 Starting Job Scout...");

    let config = RunConfig::from_env()?;
    info!("Loaded config: {:?}", config);

    let fetcher = HttpFetcher::new(config.timeout)?;
    let registry = Registry::new();
    let harvest = Aggregator::new(&fetcher, &registry, &config).run(DEFAULT_SOURCES);

    let today = Local::now().date_naive();
    let files = report::write_outputs(&config.output_dir, today, &harvest)?;

    let subject = report::digest_subject(harvest.jobs.len(), harvest.leads.len(), today);
    let html = report::render_digest(&harvest.jobs, &harvest.leads, &config.keywords, Utc::now());

    // The CSVs are already on disk, so a failed send does not fail the run.
    if let Err(e) = mailer::send_digest(&config.mail, &subject, &html) {
        error!("❌ Failed to send digest: {}", e);
    }

    if files.jobs_written {
        info!("Saved: {}", files.jobs.display());
    }
    if files.leads_written {
        info!("Saved: {}", files.leads.display());
    }
    info!("✨ Done.");
    Ok(())
}
