use std::sync::Arc;

use chrono::{DateTime, Utc};
use jobboard_core::{JobId, JobRecord, SessionContext};
use portal_logging::portal_info;

use crate::normalize::parse_base_url;
use crate::{CatalogSettings, CatalogSource, FailureKind, FetchError, Normalizer};

/// Supplies "now" for posted-time text.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

/// Fetches raw records and turns them into a complete, normalized catalog.
///
/// A load either returns the whole catalog or an error; callers never see a
/// partially normalized list.
#[derive(Clone)]
pub struct CatalogLoader {
    source: Arc<dyn CatalogSource>,
    normalizer: Normalizer,
    clock: Clock,
}

impl CatalogLoader {
    pub fn new(source: Arc<dyn CatalogSource>, settings: &CatalogSettings) -> Result<Self, FetchError> {
        let logo_base = parse_base_url(&settings.logo_base_url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        Ok(Self {
            source,
            normalizer: Normalizer::new(logo_base),
            clock: Arc::new(Utc::now),
        })
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub async fn load(&self, session: Option<&SessionContext>) -> Result<Vec<JobRecord>, FetchError> {
        let records = self.source.list_jobs(session).await?;
        let jobs = self.normalizer.normalize_catalog(records, (self.clock)());
        portal_info!("catalog loaded: {} jobs", jobs.len());
        Ok(jobs)
    }

    pub async fn load_job_detail(
        &self,
        job_id: &JobId,
        session: Option<&SessionContext>,
    ) -> Result<JobRecord, FetchError> {
        let record = self
            .source
            .job_detail(job_id, session)
            .await?
            .ok_or_else(|| FetchError::new(FailureKind::NotFound, format!("job {job_id}")))?;
        self.normalizer
            .normalize_value(0, record, (self.clock)())
            .map_err(|err| FetchError::new(FailureKind::Parse, err.to_string()))
    }
}
