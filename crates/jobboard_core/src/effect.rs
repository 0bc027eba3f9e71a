use crate::{JobId, SessionContext};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the full catalog; the result must echo `generation`.
    LoadCatalog {
        generation: u64,
        session: Option<SessionContext>,
    },
    /// Fetch one job for the detail view.
    LoadJobDetail {
        job_id: JobId,
        session: Option<SessionContext>,
    },
    /// An action needs a signed-in user.
    RedirectToLogin,
}
