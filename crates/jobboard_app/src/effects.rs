use std::time::Duration;

use jobboard_core::{Effect, Msg};
use jobboard_engine::{EngineEvent, EngineHandle};
use portal_logging::{portal_info, portal_warn};

/// Executes effects against the engine and turns engine events into messages.
pub struct EffectRunner {
    engine: EngineHandle,
    pending: usize,
    login_required: bool,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self {
            engine,
            pending: 0,
            login_required: false,
        }
    }

    pub fn run(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadCatalog {
                    generation,
                    session,
                } => {
                    portal_info!("LoadCatalog generation={}", generation);
                    self.engine.load_catalog(generation, session);
                    self.pending += 1;
                }
                Effect::LoadJobDetail { job_id, session } => {
                    portal_info!("LoadJobDetail job_id={}", job_id);
                    self.engine.load_job_detail(job_id, session);
                    self.pending += 1;
                }
                Effect::RedirectToLogin => {
                    portal_warn!("saving jobs requires a signed-in session");
                    self.login_required = true;
                }
            }
        }
    }

    /// Number of requests whose result has not been received yet.
    pub fn pending(&self) -> usize {
        self.pending
    }

    pub fn login_required(&self) -> bool {
        self.login_required
    }

    pub fn next_msg(&mut self, timeout: Duration) -> Option<Msg> {
        let event = self.engine.recv_timeout(timeout)?;
        self.pending = self.pending.saturating_sub(1);
        Some(event_to_msg(event))
    }

    pub fn shutdown(&self) {
        self.engine.shutdown();
    }
}

pub fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::CatalogLoaded { generation, result } => match result {
            Ok(jobs) => Msg::CatalogLoaded { generation, jobs },
            Err(err) => {
                portal_warn!("catalog load {} failed: {}", generation, err);
                Msg::CatalogLoadFailed {
                    generation,
                    message: err.to_string(),
                }
            }
        },
        EngineEvent::JobDetailLoaded { job_id, result } => match result {
            Ok(job) => Msg::JobDetailLoaded {
                job_id,
                job: Box::new(job),
            },
            Err(err) => {
                portal_warn!("job {} detail failed: {}", job_id, err);
                Msg::JobDetailFailed {
                    job_id,
                    message: err.to_string(),
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobboard_core::JobId;
    use jobboard_engine::{FailureKind, FetchError};

    #[test]
    fn failures_become_failure_messages() {
        let msg = event_to_msg(EngineEvent::CatalogLoaded {
            generation: 3,
            result: Err(FetchError {
                kind: FailureKind::HttpStatus(502),
                message: "502 Bad Gateway".into(),
            }),
        });
        assert_eq!(
            msg,
            Msg::CatalogLoadFailed {
                generation: 3,
                message: "http status 502: 502 Bad Gateway".into(),
            }
        );

        let msg = event_to_msg(EngineEvent::JobDetailLoaded {
            job_id: JobId::from(8u64),
            result: Err(FetchError {
                kind: FailureKind::NotFound,
                message: "job 8".into(),
            }),
        });
        assert_eq!(
            msg,
            Msg::JobDetailFailed {
                job_id: JobId::from(8u64),
                message: "job not found: job 8".into(),
            }
        );
    }
}
