use pistats_domain::DisplayEvent;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Emits [`DisplayEvent::Tick`] every refresh interval.
///
/// The interval (in minutes) is followed through a watch channel; `0`
/// disables the timer until a non-zero value arrives. Every change restarts
/// the countdown.
pub struct RefreshJob {
    events: mpsc::Sender<DisplayEvent>,
    interval: watch::Receiver<u32>,
    shutdown: CancellationToken,
}

impl RefreshJob {
    pub fn new(events: mpsc::Sender<DisplayEvent>, interval: watch::Receiver<u32>) -> Self {
        Self {
            events,
            interval,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self) {
        info!(minutes = *self.interval.borrow(), "Starting refresh job");
        tokio::spawn(self.run());
    }

    /// Runs until cancelled, the interval sender is dropped or the event
    /// queue is closed.
    pub async fn run(mut self) {
        loop {
            let minutes = *self.interval.borrow_and_update();

            if minutes == 0 {
                debug!("Refresh disabled");
                tokio::select! {
                    _ = self.shutdown.cancelled() => break,
                    changed = self.interval.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        continue;
                    }
                }
            }

            let period = Duration::from_secs(u64::from(minutes) * 60);
            tokio::select! {
                _ = self.shutdown.cancelled() => break,
                changed = self.interval.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    debug!(minutes = *self.interval.borrow(), "Refresh interval changed");
                }
                _ = tokio::time::sleep(period) => {
                    if self.events.send(DisplayEvent::Tick).await.is_err() {
                        break;
                    }
                }
            }
        }
        info!("RefreshJob: shutting down");
    }
}
