use super::logging::LOG_LEVELS;
use super::{
    ConfigError, DisplayConfig, LoggingConfig, PiholeConfig, RefreshConfig, SystemConfig,
    UpdatesConfig,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "/etc/pistats/pistats.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub pihole: PiholeConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub refresh: RefreshConfig,

    #[serde(default)]
    pub system: SystemConfig,

    #[serde(default)]
    pub updates: UpdatesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Command line values that win over the config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub spi_device: Option<String>,
    pub interval_minutes: Option<u32>,
    pub no_rotate: bool,
    pub log_level: Option<String>,
}

impl Config {
    /// Loads `config_path`, or the default path when it exists, or built-in
    /// defaults. An explicitly given path must exist.
    pub fn load(config_path: Option<&str>, overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => {
                Self::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => Self::default(),
        };
        config.apply_overrides(overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { message, .. } => ConfigError::Parse {
                path: path.to_string(),
                message,
            },
            other => other,
        })
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn apply_overrides(&mut self, overrides: CliOverrides) {
        if let Some(device) = overrides.spi_device {
            self.display.spi_device = device;
        }
        if let Some(minutes) = overrides.interval_minutes {
            self.refresh.interval_minutes = minutes;
        }
        if overrides.no_rotate {
            self.refresh.auto_rotate = false;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.display.spi_device.is_empty() {
            return Err(ConfigError::Invalid("display.spi_device is empty".into()));
        }
        if self.display.hardware_address > 7 {
            return Err(ConfigError::Invalid(format!(
                "display.hardware_address must be 0-7, got {}",
                self.display.hardware_address
            )));
        }
        if self.display.poll_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "display.poll_interval_ms must be greater than 0".into(),
            ));
        }
        if self.display.debounce_ms < self.display.poll_interval_ms {
            return Err(ConfigError::Invalid(format!(
                "display.debounce_ms ({}) must be at least poll_interval_ms ({})",
                self.display.debounce_ms, self.display.poll_interval_ms
            )));
        }
        if self.pihole.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "pihole.timeout_secs must be greater than 0".into(),
            ));
        }
        if self.pihole.setup_vars_path.is_empty() && self.pihole.api_token.is_none() {
            return Err(ConfigError::Invalid(
                "either pihole.api_token or pihole.setup_vars_path is required".into(),
            ));
        }
        if !LOG_LEVELS.contains(&self.logging.level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "logging.level must be one of {:?}, got {}",
                LOG_LEVELS, self.logging.level
            )));
        }
        Ok(())
    }
}
