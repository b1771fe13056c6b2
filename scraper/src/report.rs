//! CSV files and the HTML digest for one run.
//!
//! Values go into the HTML unescaped, which is only safe while the source
//! list is a fixed set of job boards.

use crate::aggregator::Harvest;
use crate::error::Result;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use log::info;
use scout_common::{JobPosting, Lead};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const MAX_DIGEST_JOBS: usize = 30;
pub const MAX_DIGEST_LEADS: usize = 40;

/// Paths for this run's CSV files and whether each one was written.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputFiles {
    pub jobs: PathBuf,
    pub leads: PathBuf,
    pub jobs_written: bool,
    pub leads_written: bool,
}

/// Writes `jobs_<date>.csv` and `leads_<date>.csv` under `dir`, creating it if needed.
pub fn write_outputs(dir: &Path, date: NaiveDate, harvest: &Harvest) -> Result<OutputFiles> {
    fs::create_dir_all(dir)?;

    let day = date.format("%Y-%m-%d");
    let jobs = dir.join(format!("jobs_{day}.csv"));
    let leads = dir.join(format!("leads_{day}.csv"));

    let jobs_written = write_jobs_csv(&harvest.jobs, &jobs)?;
    let leads_written = write_leads_csv(&harvest.leads, &leads)?;

    Ok(OutputFiles {
        jobs,
        leads,
        jobs_written,
        leads_written,
    })
}

/// Returns `false` without touching the filesystem when there are no jobs.
pub fn write_jobs_csv(jobs: &[JobPosting], path: &Path) -> Result<bool> {
    write_rows(jobs.iter().map(JobPosting::normalized), path)
}

/// Returns `false` without touching the filesystem when there are no leads.
pub fn write_leads_csv(leads: &[Lead], path: &Path) -> Result<bool> {
    write_rows(leads.iter().map(Lead::normalized), path)
}

fn write_rows<T, I>(rows: I, path: &Path) -> Result<bool>
where
    T: Serialize,
    I: IntoIterator<Item = T>,
{
    let mut rows = rows.into_iter().peekable();
    if rows.peek().is_none() {
        info!("⏭️  Nothing to write, skipping {}", path.display());
        return Ok(false);
    }

    // Header comes from the struct field order on the first serialize.
    let mut writer = csv::Writer::from_path(path)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    info!("💾 Saved {}", path.display());
    Ok(true)
}

pub fn digest_subject(jobs: usize, leads: usize, date: NaiveDate) -> String {
    format!(
        "[Job Scout] {} roles · {} leads — {}",
        jobs,
        leads,
        date.format("%Y-%m-%d")
    )
}

fn job_item(job: &JobPosting) -> String {
    format!(
        "<li><a href='{}'>{}</a> — <b>{}</b> ({}) · <i>{}</i> · <small>{}</small></li>",
        job.link, job.title, job.company, job.location, job.source, job.posted
    )
}

fn lead_item(lead: &Lead) -> String {
    format!(
        "<li>{} — <a href='mailto:{}'>{}</a> · <small>{}</small></li>",
        lead.company, lead.email, lead.email, lead.source
    )
}

/// HTML body of the email: first 30 jobs, first 40 leads, keywords and a UTC stamp.
pub fn render_digest(
    jobs: &[JobPosting],
    leads: &[Lead],
    keywords: &[String],
    generated_at: DateTime<Utc>,
) -> String {
    let jobs_block = if jobs.is_empty() {
        "<p>No matches today.</p>".to_string()
    } else {
        let items: String = jobs.iter().take(MAX_DIGEST_JOBS).map(job_item).collect();
        format!("<ul>{items}</ul>")
    };

    let leads_block = if leads.is_empty() {
        "<p>No leads today.</p>".to_string()
    } else {
        let items: String = leads.iter().take(MAX_DIGEST_LEADS).map(lead_item).collect();
        format!("<ul>{items}</ul>")
    };

    format!(
        r#"<html>
<body>
  <h2>Daily Job Scout — Graphic/Logo/Branding</h2>
  <p>Keywords: {keywords}</p>
  <h3>New Roles</h3>
  {jobs_block}
  <h3>Lead Emails</h3>
  {leads_block}
  <hr/>
  <small>Generated {generated}</small>
</body>
</html>
"#,
        keywords = keywords.join(", "),
        generated = generated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
    )
}
