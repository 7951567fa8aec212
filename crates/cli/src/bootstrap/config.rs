use pistats_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        spi_device = %config.display.spi_device,
        interval_minutes = config.refresh.interval_minutes,
        auto_rotate = config.refresh.auto_rotate,
        "Configuration loaded"
    );

    Ok(config)
}
