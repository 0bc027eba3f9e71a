//! Job board engine: catalog fetching, normalization and request execution.
mod engine;
mod loader;
mod normalize;
mod raw;
mod source;
mod types;

pub use engine::EngineHandle;
pub use loader::{CatalogLoader, Clock};
pub use normalize::{MalformedRecord, Normalizer};
pub use raw::RawJobRecord;
pub use source::{CatalogSettings, CatalogSource, ReqwestCatalogSource, DEFAULT_API_BASE_URL};
pub use types::{EngineEvent, FailureKind, FetchError};
