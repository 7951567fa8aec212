use pistats_application::ports::SwitchPort;
use pistats_domain::{DisplayEvent, Switch};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Turns raw switch port samples into press edges.
///
/// A switch changes state only after reading the same level for
/// `stable_samples` consecutive samples; only released-to-pressed changes are
/// reported.
#[derive(Debug, Clone)]
pub struct Debouncer {
    stable_samples: u32,
    state: u8,
    counters: [u32; 8],
}

impl Debouncer {
    pub fn new(stable_samples: u32) -> Self {
        Self {
            stable_samples: stable_samples.max(1),
            state: 0,
            counters: [0; 8],
        }
    }

    /// Sample count covering `debounce` at one sample per `poll`.
    pub fn from_timing(poll: Duration, debounce: Duration) -> Self {
        let poll_ms = poll.as_millis().max(1);
        let samples = debounce.as_millis().div_ceil(poll_ms);
        Self::new(u32::try_from(samples).unwrap_or(u32::MAX))
    }

    pub fn state(&self) -> u8 {
        self.state
    }

    pub fn update(&mut self, raw: u8) -> Vec<Switch> {
        let mut pressed = Vec::new();

        for switch in Switch::ALL {
            let mask = switch.mask();
            let counter = &mut self.counters[switch.index() as usize];

            if (raw & mask) == (self.state & mask) {
                *counter = 0;
                continue;
            }

            *counter += 1;
            if *counter >= self.stable_samples {
                *counter = 0;
                self.state ^= mask;
                if self.state & mask != 0 {
                    pressed.push(switch);
                }
            }
        }
        pressed
    }
}

/// Samples the switch port and queues a [`DisplayEvent::Pressed`] per press.
pub struct ButtonListenerJob {
    switches: Arc<dyn SwitchPort>,
    events: mpsc::Sender<DisplayEvent>,
    poll_interval: Duration,
    debounce: Duration,
    shutdown: CancellationToken,
}

impl ButtonListenerJob {
    pub fn new(switches: Arc<dyn SwitchPort>, events: mpsc::Sender<DisplayEvent>) -> Self {
        Self {
            switches,
            events,
            poll_interval: Duration::from_millis(20),
            debounce: Duration::from_millis(50),
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_timing(mut self, poll_ms: u64, debounce_ms: u64) -> Self {
        self.poll_interval = Duration::from_millis(poll_ms.max(1));
        self.debounce = Duration::from_millis(debounce_ms);
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self) {
        info!(
            poll_ms = self.poll_interval.as_millis() as u64,
            debounce_ms = self.debounce.as_millis() as u64,
            "Starting button listener"
        );
        tokio::spawn(self.run());
    }

    pub async fn run(self) {
        let mut debouncer = Debouncer::from_timing(self.poll_interval, self.debounce);
        let mut interval = tokio::time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        let mut failing = false;

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => break,
                _ = interval.tick() => {
                    let raw = match self.switches.read_switches() {
                        Ok(raw) => {
                            failing = false;
                            raw
                        }
                        Err(e) => {
                            if !failing {
                                warn!(error = %e, "Failed to read switches");
                                failing = true;
                            }
                            continue;
                        }
                    };

                    for switch in debouncer.update(raw) {
                        debug!(?switch, "Switch pressed");
                        if self.events.send(DisplayEvent::Pressed(switch)).await.is_err() {
                            info!("ButtonListenerJob: event queue closed");
                            return;
                        }
                    }
                }
            }
        }
        info!("ButtonListenerJob: shutting down");
    }
}
