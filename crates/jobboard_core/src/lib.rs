//! Job board core: catalog data model, facet filtering and the pure state machine.
mod effect;
mod facet;
mod filter;
mod msg;
mod posted_time;
mod record;
mod session;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use facet::{
    derive_facets, search_facet_options, FacetCategory, FacetOption, Facets, ANY_EXPERIENCE,
    ANY_EXPERIENCE_LABEL,
};
pub use filter::{apply_filters, FilterState};
pub use msg::Msg;
pub use posted_time::{format_elapsed, format_posted_time, parse_timestamp, RECENTLY_POSTED};
pub use record::{JobId, JobRecord};
pub use session::{SessionContext, DEFAULT_DISPLAY_NAME};
pub use state::{AppState, DetailState, LoadStatus};
pub use update::update;
pub use view_model::{
    AppViewModel, DetailView, FacetMenuView, FacetOptionView, JobDetailView, JobRowView,
};

/// Fallback values used when a raw catalog record omits a field.
pub const FALLBACK_TITLE: &str = "Not specified";
pub const FALLBACK_COMPANY: &str = "Company";
pub const FALLBACK_DESCRIPTION: &str = "No description available";
pub const FALLBACK_LOCATION: &str = "Not specified";
pub const FALLBACK_EMPLOYMENT_TYPE: &str = "Full Time";
pub const FALLBACK_EXPERIENCE: &str = "Not specified";
