use serde::{Deserialize, Serialize};

/// PiFace Control and Display wiring and switch sampling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// SPI device node of the board (default: /dev/spidev0.1)
    #[serde(default = "default_spi_device")]
    pub spi_device: String,

    /// SPI clock in Hz (default: 100000)
    #[serde(default = "default_spi_speed_hz")]
    pub spi_speed_hz: u32,

    /// MCP23S17 hardware address set by the board jumpers (0-7, default: 0)
    #[serde(default)]
    pub hardware_address: u8,

    /// How often the switch port is sampled, in milliseconds (default: 20)
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// How long a switch must be stable before a change counts (default: 50)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            spi_device: default_spi_device(),
            spi_speed_hz: default_spi_speed_hz(),
            hardware_address: 0,
            poll_interval_ms: default_poll_interval_ms(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

fn default_spi_device() -> String {
    "/dev/spidev0.1".to_string()
}

fn default_spi_speed_hz() -> u32 {
    100_000
}

fn default_poll_interval_ms() -> u64 {
    20
}

fn default_debounce_ms() -> u64 {
    50
}
