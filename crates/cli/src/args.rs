use clap::Parser;
use pistats_domain::config::DisplayConfig;
use pistats_domain::CliOverrides;

#[derive(Parser, Debug)]
#[command(name = "pistats")]
#[command(version)]
#[command(about = "Pi-hole statistics on the PiFace Control and Display")]
pub struct PistatsArgs {
    /// Path to configuration file
    #[arg(short = 'c', long)]
    pub config: Option<String>,

    /// Refresh interval in minutes (0 disables refresh)
    #[arg(short = 'i', long)]
    pub interval: Option<u32>,

    /// Keep the selected page instead of rotating on refresh
    #[arg(long)]
    pub no_rotate: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// SPI device of the board
    #[arg(long)]
    pub spi_device: Option<String>,
}

impl PistatsArgs {
    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            spi_device: self.spi_device.clone(),
            interval_minutes: self.interval,
            no_rotate: self.no_rotate,
            log_level: self.log_level.clone(),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "lcd-clear")]
#[command(version)]
#[command(about = "Clear the LCD screen.")]
pub struct ClearArgs {
    /// Turns the LCD screen off after clearing it
    #[arg(short = 'f', long, conflicts_with = "on")]
    pub off: bool,

    /// Turns the LCD screen on after clearing it
    #[arg(short = 'o', long)]
    pub on: bool,

    /// SPI device of the board
    #[arg(long)]
    pub spi_device: Option<String>,
}

#[derive(Parser, Debug)]
#[command(name = "lcd-write")]
#[command(version)]
#[command(about = "Write a message to the LCD screen.")]
pub struct WriteArgs {
    /// Text to display. A newline starts the second row. Clears the screen when unset
    #[arg(default_value = "")]
    pub message: String,

    /// Write the message with the backlight off
    #[arg(short = 'n', long, conflicts_with = "backlight")]
    pub no_backlight: bool,

    /// Write the message with the backlight on (default)
    #[arg(short = 'b', long)]
    pub backlight: bool,

    /// SPI device of the board
    #[arg(long)]
    pub spi_device: Option<String>,
}

impl WriteArgs {
    pub fn backlight_on(&self) -> bool {
        !self.no_backlight
    }
}

#[derive(Parser, Debug)]
#[command(name = "lcd-hello")]
#[command(version)]
#[command(about = "Light the LCD and print a greeting.")]
pub struct HelloArgs {
    /// Greeting to print
    pub message: Option<String>,

    /// SPI device of the board
    #[arg(long)]
    pub spi_device: Option<String>,
}

/// Board settings for the one-shot tools: defaults plus the device override.
pub fn display_config(spi_device: Option<String>) -> DisplayConfig {
    let mut display = DisplayConfig::default();
    if let Some(device) = spi_device {
        display.spi_device = device;
    }
    display
}
