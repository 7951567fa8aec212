use anyhow::Context;
use pistats_domain::config::DisplayConfig;
use pistats_infrastructure::lcd::{open_piface, PifaceLcd, PifaceSwitches};

pub fn open_hardware(display: &DisplayConfig) -> anyhow::Result<(PifaceLcd, PifaceSwitches)> {
    open_piface(display).with_context(|| {
        format!(
            "PiFace Control and Display not available on {}",
            display.spi_device
        )
    })
}
