use crate::{FacetCategory, JobId, JobRecord, SessionContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User asked for a (re)load of the catalog.
    LoadRequested,
    /// Loader finished with a complete, normalized catalog.
    CatalogLoaded { generation: u64, jobs: Vec<JobRecord> },
    /// Loader failed; the previous catalog stays in place.
    CatalogLoadFailed { generation: u64, message: String },
    /// User edited the keyword box.
    KeywordChanged(String),
    /// User edited the location box.
    LocationQueryChanged(String),
    /// User clicked a facet option.
    FacetToggled {
        category: FacetCategory,
        value: String,
    },
    /// User typed into the search box above a facet menu.
    FacetSearchChanged {
        category: FacetCategory,
        text: String,
    },
    /// User clicked "reset filters".
    FiltersReset,
    /// User opened a job.
    JobSelected(JobId),
    JobDetailLoaded { job_id: JobId, job: Box<JobRecord> },
    JobDetailFailed { job_id: JobId, message: String },
    /// User left the detail view.
    DetailClosed,
    /// User clicked the bookmark on a job.
    SaveToggled(JobId),
    SessionStarted(SessionContext),
    SessionEnded,
    /// The view is being torn down; late results are dropped.
    ViewClosed,
}
