use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use jobboard_core::{JobId, SessionContext};
use portal_logging::{portal_debug, portal_error};
use tokio_util::sync::CancellationToken;

use crate::{CatalogLoader, CatalogSettings, EngineEvent, FetchError, ReqwestCatalogSource};

enum EngineCommand {
    LoadCatalog {
        generation: u64,
        session: Option<SessionContext>,
    },
    LoadJobDetail {
        job_id: JobId,
        session: Option<SessionContext>,
    },
}

/// Runs catalog requests on a background runtime.
///
/// Commands go in through `load_*`, results come back through `try_recv` /
/// `recv_timeout`. After `shutdown` (or drop) in-flight requests are aborted
/// and their results are never delivered.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    cancel: CancellationToken,
}

impl EngineHandle {
    pub fn new(settings: CatalogSettings) -> Result<Self, FetchError> {
        let source = Arc::new(ReqwestCatalogSource::new(settings.clone()));
        let loader = CatalogLoader::new(source, &settings)?;
        Ok(Self::with_loader(loader))
    }

    pub fn with_loader(loader: CatalogLoader) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let loader = Arc::new(loader);
        let worker_cancel = cancel.clone();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    portal_error!("could not start engine runtime: {}", err);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let loader = loader.clone();
                let event_tx = event_tx.clone();
                let cancel = worker_cancel.clone();
                runtime.spawn(async move {
                    handle_command(loader.as_ref(), command, event_tx, cancel).await;
                });
            }
            portal_debug!("engine command channel closed");
        });

        Self {
            cmd_tx,
            event_rx,
            cancel,
        }
    }

    pub fn load_catalog(&self, generation: u64, session: Option<SessionContext>) {
        let _ = self.cmd_tx.send(EngineCommand::LoadCatalog {
            generation,
            session,
        });
    }

    pub fn load_job_detail(&self, job_id: JobId, session: Option<SessionContext>) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::LoadJobDetail { job_id, session });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    /// Aborts in-flight requests; their results are discarded.
    pub fn shutdown(&self) {
        self.cancel.cancel();
    }

    pub fn is_shut_down(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn handle_command(
    loader: &CatalogLoader,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
    cancel: CancellationToken,
) {
    let event = match command {
        EngineCommand::LoadCatalog {
            generation,
            session,
        } => {
            let result = tokio::select! {
                _ = cancel.cancelled() => return,
                result = loader.load(session.as_ref()) => result,
            };
            EngineEvent::CatalogLoaded { generation, result }
        }
        EngineCommand::LoadJobDetail { job_id, session } => {
            let result = tokio::select! {
                _ = cancel.cancelled() => return,
                result = loader.load_job_detail(&job_id, session.as_ref()) => result,
            };
            EngineEvent::JobDetailLoaded { job_id, result }
        }
    };
    if cancel.is_cancelled() {
        portal_debug!("engine shut down; dropping result");
        return;
    }
    let _ = event_tx.send(event);
}
