mod signals;

pub use signals::spawn_signal_listener;

use crate::bootstrap::open_hardware;
use crate::di::Services;
use pistats_application::ports::{Lcd, SwitchPort};
use pistats_application::use_cases::{Flow, StatusController};
use pistats_domain::{Config, DisplayEvent, DomainError};
use pistats_jobs::{ButtonListenerJob, JobRunner, RefreshJob};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

const EVENT_QUEUE_CAPACITY: usize = 32;

/// Opens the board and runs the status display until the exit button,
/// a signal or a fatal refresh error.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let services = Services::new(&config)?;
    let (lcd, switches) = open_hardware(&config.display)?;

    let shutdown = CancellationToken::new();
    spawn_signal_listener(shutdown.clone());

    run_with(config, services, lcd, Arc::new(switches), shutdown).await?;
    Ok(())
}

/// Wires jobs, controller and event loop around the given display.
pub async fn run_with<L: Lcd>(
    config: Config,
    services: Services,
    lcd: L,
    switches: Arc<dyn SwitchPort>,
    shutdown: CancellationToken,
) -> Result<(), DomainError> {
    let (event_tx, event_rx) = mpsc::channel(EVENT_QUEUE_CAPACITY);
    let (interval_tx, interval_rx) = watch::channel(config.refresh.interval_minutes);

    let controller = StatusController::new(
        lcd,
        services.collect_snapshot(),
        Arc::clone(&services.updater),
        interval_tx,
        config.refresh.auto_rotate,
    );

    JobRunner::new()
        .with_refresh(
            RefreshJob::new(event_tx.clone(), interval_rx).with_cancellation(shutdown.clone()),
        )
        .with_button_listener(
            ButtonListenerJob::new(switches, event_tx)
                .with_timing(config.display.poll_interval_ms, config.display.debounce_ms)
                .with_cancellation(shutdown.clone()),
        )
        .start()
        .await;

    run_event_loop(controller, event_rx, shutdown).await
}

/// Drains the event queue into the controller. Every exit path cancels
/// `shutdown` and powers the display down.
pub async fn run_event_loop<L: Lcd>(
    mut controller: StatusController<L>,
    mut events: mpsc::Receiver<DisplayEvent>,
    shutdown: CancellationToken,
) -> Result<(), DomainError> {
    let result = drive(&mut controller, &mut events, &shutdown).await;

    shutdown.cancel();
    if let Err(e) = &result {
        error!(error = %e, "Status display stopped");
    }

    match controller.shutdown() {
        Ok(()) => result,
        Err(e) => {
            error!(error = %e, "Failed to power down display");
            result.and(Err(e))
        }
    }
}

async fn drive<L: Lcd>(
    controller: &mut StatusController<L>,
    events: &mut mpsc::Receiver<DisplayEvent>,
    shutdown: &CancellationToken,
) -> Result<(), DomainError> {
    controller.start().await?;
    info!("Status display running");

    loop {
        tokio::select! {
            _ = shutdown.cancelled() => {
                info!("Shutdown requested");
                return Ok(());
            }
            event = events.recv() => {
                let Some(event) = event else {
                    info!("Event queue closed");
                    return Ok(());
                };
                if controller.handle(event).await? == Flow::Exit {
                    return Ok(());
                }
            }
        }
    }
}
