use std::time::{Duration, Instant};

use anyhow::bail;
use jobboard_core::{update, AppState, AppViewModel, Msg};

use crate::effects::EffectRunner;

/// Owns the state and feeds every message through `update`.
pub struct App {
    state: AppState,
    runner: EffectRunner,
}

impl App {
    pub fn new(runner: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            runner,
        }
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);
    }

    /// Processes engine results until no request is outstanding.
    pub fn settle(&mut self, timeout: Duration) -> anyhow::Result<()> {
        let deadline = Instant::now() + timeout;
        while self.runner.pending() > 0 {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                bail!("timed out after {:?} waiting for the job portal", timeout);
            }
            if let Some(msg) = self.runner.next_msg(remaining) {
                self.dispatch(msg);
            }
        }
        Ok(())
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn login_required(&self) -> bool {
        self.runner.login_required()
    }

    /// Tears the view down: late results are ignored and in-flight requests aborted.
    pub fn close(&mut self) {
        self.dispatch(Msg::ViewClosed);
        self.runner.shutdown();
    }
}
