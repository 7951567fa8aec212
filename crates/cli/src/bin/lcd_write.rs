use clap::Parser;
use pistats::args::{display_config, WriteArgs};
use pistats::bootstrap::{init_logging, open_hardware};
use pistats_application::use_cases::WriteMessageUseCase;

fn main() -> anyhow::Result<()> {
    let args = WriteArgs::parse();
    init_logging("warn");

    let backlight = args.backlight_on();
    let (lcd, _switches) = open_hardware(&display_config(args.spi_device))?;

    WriteMessageUseCase::new(lcd).execute(&args.message, backlight)?;
    Ok(())
}
