//! # pistats
//!
//! Status daemon: refreshes Pi-hole statistics and renders them on the
//! PiFace Control and Display until the exit button or a signal.

use clap::Parser;
use pistats::args::PistatsArgs;
use pistats::bootstrap::{init_logging, load_config};
use pistats::daemon;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = PistatsArgs::parse();

    let config = load_config(args.config.as_deref(), args.overrides())?;
    init_logging(&config.logging.level);

    info!(version = env!("CARGO_PKG_VERSION"), "Starting pistats");

    daemon::run(config).await?;

    info!("pistats stopped");
    Ok(())
}
