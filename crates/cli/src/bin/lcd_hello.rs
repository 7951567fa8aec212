use clap::Parser;
use pistats::args::{display_config, HelloArgs};
use pistats::bootstrap::{init_logging, open_hardware};
use pistats_application::use_cases::GreetUseCase;

fn main() -> anyhow::Result<()> {
    let args = HelloArgs::parse();
    init_logging("warn");

    let (lcd, _switches) = open_hardware(&display_config(args.spi_device))?;

    GreetUseCase::new(lcd).execute(args.message.as_deref())?;
    Ok(())
}
