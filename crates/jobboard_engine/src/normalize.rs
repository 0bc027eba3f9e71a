use std::collections::HashSet;

use chrono::{DateTime, Utc};
use jobboard_core::{
    format_elapsed, parse_timestamp, JobId, JobRecord, FALLBACK_COMPANY, FALLBACK_DESCRIPTION,
    FALLBACK_EMPLOYMENT_TYPE, FALLBACK_EXPERIENCE, FALLBACK_LOCATION, FALLBACK_TITLE,
    RECENTLY_POSTED,
};
use portal_logging::{portal_debug, portal_warn};
use serde_json::Value;
use thiserror::Error;
use url::Url;

use crate::RawJobRecord;

/// A raw record that cannot become a `JobRecord`. It is dropped, the rest of
/// the catalog still loads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedRecord {
    #[error("record {index} has an unexpected shape: {message}")]
    Shape { index: usize, message: String },
    #[error("record {index} has no usable id")]
    MissingId { index: usize },
    #[error("record {index} repeats id {id}")]
    DuplicateId { index: usize, id: JobId },
}

/// Maps backend records to the canonical record shape.
#[derive(Debug, Clone)]
pub struct Normalizer {
    logo_base: Url,
}

impl Normalizer {
    pub fn new(logo_base: Url) -> Self {
        Self { logo_base }
    }

    /// Normalizes a whole list, skipping malformed and duplicate records.
    pub fn normalize_catalog(&self, records: Vec<Value>, now: DateTime<Utc>) -> Vec<JobRecord> {
        let total = records.len();
        let mut seen = HashSet::with_capacity(total);
        let mut jobs = Vec::with_capacity(total);
        for (index, value) in records.into_iter().enumerate() {
            let job = match self.normalize_value(index, value, now) {
                Ok(job) => job,
                Err(err) => {
                    portal_warn!("dropping job record: {}", err);
                    continue;
                }
            };
            if !seen.insert(job.id.clone()) {
                portal_warn!(
                    "dropping job record: {}",
                    MalformedRecord::DuplicateId { index, id: job.id }
                );
                continue;
            }
            jobs.push(job);
        }
        portal_debug!("normalized {} of {} job records", jobs.len(), total);
        jobs
    }

    pub fn normalize_value(
        &self,
        index: usize,
        value: Value,
        now: DateTime<Utc>,
    ) -> Result<JobRecord, MalformedRecord> {
        let raw: RawJobRecord = serde_json::from_value(value).map_err(|err| {
            MalformedRecord::Shape {
                index,
                message: err.to_string(),
            }
        })?;
        self.normalize(index, raw, now)
    }

    pub fn normalize(
        &self,
        index: usize,
        raw: RawJobRecord,
        now: DateTime<Utc>,
    ) -> Result<JobRecord, MalformedRecord> {
        let id = raw
            .id
            .as_ref()
            .and_then(job_id_from)
            .ok_or(MalformedRecord::MissingId { index })?;

        let employment_type =
            present(raw.employment_type).unwrap_or_else(|| FALLBACK_EMPLOYMENT_TYPE.to_string());
        let work_model = present(raw.work_model);
        let mut tags = vec![employment_type.clone()];
        tags.extend(work_model.clone());

        let posted_at = raw.dtime.as_deref().and_then(parse_timestamp);
        let posted_time = match posted_at {
            Some(posted_at) => format_elapsed(posted_at, now),
            None => RECENTLY_POSTED.to_string(),
        };

        Ok(JobRecord {
            id,
            title: present(raw.job_title)
                .or_else(|| present(raw.job_type))
                .unwrap_or_else(|| FALLBACK_TITLE.to_string()),
            company: present(raw.company_name).unwrap_or_else(|| FALLBACK_COMPANY.to_string()),
            description: present(raw.job_description)
                .unwrap_or_else(|| FALLBACK_DESCRIPTION.to_string()),
            location: present(raw.location).unwrap_or_else(|| FALLBACK_LOCATION.to_string()),
            employment_type,
            experience_level: present(raw.experience_level)
                .unwrap_or_else(|| FALLBACK_EXPERIENCE.to_string()),
            work_model,
            posted_at,
            posted_time,
            logo_url: present(raw.company_logo).and_then(|path| self.logo_url(&path)),
            tags,
        })
    }

    /// Prefixes the logo base. The path is never resolved against the base,
    /// so it cannot leave it.
    fn logo_url(&self, path: &str) -> Option<String> {
        let logo_url = format!("{}{}", self.logo_base, path.trim_start_matches('/'));
        match Url::parse(&logo_url) {
            Ok(_) => Some(logo_url),
            Err(err) => {
                portal_warn!("ignoring logo path {:?}: {}", path, err);
                None
            }
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.is_empty())
}

fn job_id_from(value: &Value) -> Option<JobId> {
    match value {
        Value::String(text) if !text.trim().is_empty() => Some(JobId::from(text.as_str())),
        Value::Number(number) => number
            .as_u64()
            .map(JobId::from)
            .or_else(|| number.as_i64().map(JobId::from))
            .or_else(|| number.as_f64().and_then(integral_id)),
        _ => None,
    }
}

/// `3.0` names the same record as `3`; fractional ids are rejected.
fn integral_id(value: f64) -> Option<JobId> {
    if value.fract() != 0.0 || value.abs() >= 9_007_199_254_740_992.0 {
        return None;
    }
    Some(JobId::from(value as i64))
}

/// Parses the logo base, making sure relative paths append to it.
pub(crate) fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    if raw.ends_with('/') {
        Url::parse(raw)
    } else {
        Url::parse(&format!("{raw}/"))
    }
}
