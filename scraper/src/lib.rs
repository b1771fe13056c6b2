//! Job scout: collects graphic-design job postings and contact leads from a
//! fixed list of job boards, writes them to CSV and emails an HTML digest.

pub mod aggregator;
pub mod config;
pub mod dedup;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod filter;
pub mod logger;
pub mod mailer;
pub mod matcher;
pub mod report;
pub mod sources;

pub use aggregator::{Aggregator, Harvest};
pub use config::{MailSettings, RunConfig};
pub use error::{Result, ScoutError};
pub use extract::{Extraction, ExtractorRule, Page, Registry};
pub use fetch::{HttpFetcher, PageFetcher};
pub use mailer::Delivery;
pub use sources::DEFAULT_SOURCES;
