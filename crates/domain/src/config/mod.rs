//! Configuration module for pistats
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `pihole`: Summary endpoint, API token and local IP probe
//! - `display`: PiFace board wiring and switch sampling
//! - `refresh`: Refresh interval and page rotation
//! - `system`: Local status files
//! - `software`: Update checks and installation
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod display;
pub mod errors;
pub mod logging;
pub mod pihole;
pub mod refresh;
pub mod root;
pub mod software;
pub mod system;

pub use display::DisplayConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use pihole::PiholeConfig;
pub use refresh::{RefreshConfig, INTERVAL_CHOICES};
pub use root::{CliOverrides, Config, DEFAULT_CONFIG_PATH};
pub use software::UpdatesConfig;
pub use system::SystemConfig;
