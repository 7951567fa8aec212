use super::hd44780::Hd44780;
use super::mcp23s17::{Mcp23s17, SpiBus, GPIOA};
use linux_embedded_hal::spidev::{SpiModeFlags, Spidev, SpidevOptions};
use pistats_application::ports::SwitchPort;
use pistats_domain::config::DisplayConfig;
use pistats_domain::DomainError;
use std::sync::{Arc, Mutex};
use tracing::info;

pub type PifaceLcd = Hd44780<Spidev>;

/// Front buttons and rocker of the board, read from port A.
pub struct PifaceSwitches<S: SpiBus = Spidev> {
    bus: Arc<Mutex<Mcp23s17<S>>>,
}

impl<S: SpiBus> PifaceSwitches<S> {
    pub fn new(bus: Arc<Mutex<Mcp23s17<S>>>) -> Self {
        Self { bus }
    }
}

impl<S: SpiBus> SwitchPort for PifaceSwitches<S> {
    fn read_switches(&self) -> Result<u8, DomainError> {
        let mut bus = self
            .bus
            .lock()
            .map_err(|_| DomainError::Hardware("SPI bus lock poisoned".to_string()))?;
        bus.read_register(GPIOA)
    }
}

/// Opens the board on the configured SPI device and initialises both the
/// expander and the LCD. The two handles share the SPI bus.
pub fn open_piface(config: &DisplayConfig) -> Result<(PifaceLcd, PifaceSwitches), DomainError> {
    let mut spi = Spidev::open(&config.spi_device).map_err(|e| {
        DomainError::Hardware(format!("Failed to open {}: {}", config.spi_device, e))
    })?;

    let options = SpidevOptions::new()
        .bits_per_word(8)
        .max_speed_hz(config.spi_speed_hz)
        .mode(SpiModeFlags::SPI_MODE_0)
        .build();
    spi.configure(&options).map_err(|e| {
        DomainError::Hardware(format!("Failed to configure {}: {}", config.spi_device, e))
    })?;

    let mut chip = Mcp23s17::new(spi, config.hardware_address);
    chip.init_piface()?;
    let bus = Arc::new(Mutex::new(chip));

    let mut lcd = Hd44780::new(Arc::clone(&bus));
    lcd.init()?;

    info!(
        device = %config.spi_device,
        hardware_address = config.hardware_address,
        "PiFace Control and Display ready"
    );

    Ok((lcd, PifaceSwitches::new(bus)))
}
