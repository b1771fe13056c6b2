//! Shared data model for the job scout.
//!
//! Field order on both structs is the column order of the CSV files.

use serde::{Deserialize, Serialize};

/// A job listing harvested from one source page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct JobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: String,
    pub source: String,
    pub posted: String,
}

impl JobPosting {
    pub fn new(
        title: impl Into<String>,
        company: impl Into<String>,
        link: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            location: String::new(),
            link: link.into(),
            source: source.into(),
            posted: String::new(),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_posted(mut self, posted: impl Into<String>) -> Self {
        self.posted = posted.into();
        self
    }

    /// Identity used for deduplication: (title, company, link), case-sensitive.
    pub fn key(&self) -> (&str, &str, &str) {
        (&self.title, &self.company, &self.link)
    }

    /// Copy with every field trimmed, as written to disk.
    pub fn normalized(&self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            link: self.link.trim().to_string(),
            source: self.source.trim().to_string(),
            posted: self.posted.trim().to_string(),
        }
    }
}

/// A contact email address found in a page's text.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Lead {
    pub company: String,
    pub email: String,
    pub source: String,
    pub link: String,
}

impl Lead {
    pub fn new(
        company: impl Into<String>,
        email: impl Into<String>,
        source: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            company: company.into(),
            email: email.into(),
            source: source.into(),
            link: link.into(),
        }
    }

    /// Identity used for deduplication: (company, email).
    pub fn key(&self) -> (&str, &str) {
        (&self.company, &self.email)
    }

    pub fn normalized(&self) -> Self {
        Self {
            company: self.company.trim().to_string(),
            email: self.email.trim().to_string(),
            source: self.source.trim().to_string(),
            link: self.link.trim().to_string(),
        }
    }
}
