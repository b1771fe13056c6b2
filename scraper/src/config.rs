//! Run configuration, read once from the environment (and an optional `.env`).

use crate::error::{Result, ScoutError};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_KEYWORDS: &str = "graphic designer,logo design,branding";
pub const DEFAULT_BLOCKLIST: &str = "no-reply,noreply,donotreply";

#[derive(Debug, Clone)]
pub struct RunConfig {
    pub keywords: Vec<String>,
    pub timeout: Duration,
    /// Only one page per source is fetched; kept so the setting is visible in logs.
    pub max_pages_per_site: u32,
    /// Lowercased substrings matched against a lead's email domain.
    pub lead_email_blocklist: Vec<String>,
    pub polite_delay: Duration,
    pub output_dir: PathBuf,
    pub mail: MailSettings,
}

#[derive(Clone, Default)]
pub struct MailSettings {
    pub smtp_host: String,
    pub smtp_port: u16,
    pub smtp_user: String,
    pub smtp_pass: String,
    pub mail_from: String,
    pub mail_to: String,
}

impl MailSettings {
    /// Host, user, password, sender and recipient must all be set.
    pub fn is_complete(&self) -> bool {
        [
            &self.smtp_host,
            &self.smtp_user,
            &self.smtp_pass,
            &self.mail_from,
            &self.mail_to,
        ]
        .iter()
        .all(|v| !v.is_empty())
    }
}

impl fmt::Debug for MailSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pass = if self.smtp_pass.is_empty() { "" } else { "***" };
        f.debug_struct("MailSettings")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_user", &self.smtp_user)
            .field("smtp_pass", &pass)
            .field("mail_from", &self.mail_from)
            .field("mail_to", &self.mail_to)
            .finish()
    }
}

impl RunConfig {
    /// Loads `.env` if there is one, then reads the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let mail = MailSettings {
            smtp_host: text("SMTP_HOST", ""),
            smtp_port: number(&lookup, "SMTP_PORT", 587)?,
            smtp_user: text("SMTP_USER", ""),
            smtp_pass: text("SMTP_PASS", ""),
            mail_from: text("MAIL_FROM", ""),
            mail_to: text("MAIL_TO", ""),
        };

        Ok(Self {
            keywords: split_list(&text("KEYWORDS", DEFAULT_KEYWORDS)),
            timeout: Duration::from_secs(number(&lookup, "TIMEOUT_SECONDS", 20)?),
            max_pages_per_site: number(&lookup, "MAX_PAGES_PER_SITE", 1)?,
            lead_email_blocklist: split_list(&text("LEAD_EMAIL_DOMAINS_BLOCKLIST", DEFAULT_BLOCKLIST))
                .into_iter()
                .map(|s| s.to_lowercase())
                .collect(),
            polite_delay: Duration::from_millis(number(&lookup, "POLITE_DELAY_MS", 1000)?),
            output_dir: PathBuf::from(text("OUTPUT_DIR", "out")),
            mail,
        })
    }
}

/// Comma-separated list, entries trimmed, blanks dropped.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

fn number<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ScoutError::Config {
            key: key.to_string(),
            value: raw,
        }),
    }
}
