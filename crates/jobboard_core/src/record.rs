use std::fmt;

use chrono::{DateTime, Utc};

/// Opaque job identifier. Source ids may be strings or integers; both are
/// kept in their textual form so comparisons stay exact.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobId(String);

impl JobId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for JobId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for JobId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for JobId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for JobId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

/// One normalized job posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub id: JobId,
    pub title: String,
    pub company: String,
    pub description: String,
    pub location: String,
    pub employment_type: String,
    pub experience_level: String,
    pub work_model: Option<String>,
    pub posted_at: Option<DateTime<Utc>>,
    /// Relative display text computed once when the catalog was loaded.
    pub posted_time: String,
    pub logo_url: Option<String>,
    pub tags: Vec<String>,
}

impl JobRecord {
    /// Builds a record with the catalog fallback values in every optional
    /// field; tests and fixtures override what they need.
    pub fn with_defaults(id: impl Into<JobId>) -> Self {
        Self {
            id: id.into(),
            title: crate::FALLBACK_TITLE.to_string(),
            company: crate::FALLBACK_COMPANY.to_string(),
            description: crate::FALLBACK_DESCRIPTION.to_string(),
            location: crate::FALLBACK_LOCATION.to_string(),
            employment_type: crate::FALLBACK_EMPLOYMENT_TYPE.to_string(),
            experience_level: crate::FALLBACK_EXPERIENCE.to_string(),
            work_model: None,
            posted_at: None,
            posted_time: crate::RECENTLY_POSTED.to_string(),
            logo_url: None,
            tags: vec![crate::FALLBACK_EMPLOYMENT_TYPE.to_string()],
        }
    }
}
