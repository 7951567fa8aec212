use crate::{ButtonListenerJob, RefreshJob};
use tracing::info;

/// Central orchestrator for the jobs feeding the display event queue.
///
/// ```rust,ignore
/// JobRunner::new()
///     .with_refresh(RefreshJob::new(tx.clone(), interval_rx))
///     .with_button_listener(ButtonListenerJob::new(switches, tx))
///     .start()
///     .await;
/// ```
pub struct JobRunner {
    refresh: Option<RefreshJob>,
    button_listener: Option<ButtonListenerJob>,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            refresh: None,
            button_listener: None,
        }
    }

    pub fn with_refresh(mut self, job: RefreshJob) -> Self {
        self.refresh = Some(job);
        self
    }

    pub fn with_button_listener(mut self, job: ButtonListenerJob) -> Self {
        self.button_listener = Some(job);
        self
    }

    /// Start all registered background jobs.
    pub async fn start(self) {
        info!("Starting background job runner");

        if let Some(job) = self.refresh {
            job.start().await;
        }

        if let Some(job) = self.button_listener {
            job.start().await;
        }

        info!("All background jobs started");
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}
