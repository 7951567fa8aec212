use clap::Parser;
use pistats::args::{display_config, ClearArgs};
use pistats::bootstrap::{init_logging, open_hardware};
use pistats_application::use_cases::{ClearDisplayUseCase, PowerMode};

fn main() -> anyhow::Result<()> {
    let args = ClearArgs::parse();
    init_logging("warn");

    let (lcd, _switches) = open_hardware(&display_config(args.spi_device))?;

    let power = match (args.on, args.off) {
        (true, _) => Some(PowerMode::On),
        (_, true) => Some(PowerMode::Off),
        _ => None,
    };

    ClearDisplayUseCase::new(lcd).execute(power)?;
    Ok(())
}
