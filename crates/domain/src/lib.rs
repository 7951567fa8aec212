//! pistats domain layer
pub mod config;
pub mod errors;
pub mod glyph;
pub mod input;
pub mod page;
pub mod question;
pub mod stats;
pub mod updates;
pub mod uptime;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use glyph::{symbols, Glyph, GLYPH_SLOTS};
pub use input::{DisplayEvent, Switch};
pub use page::{Page, PageRotation};
pub use question::Question;
pub use stats::{PiholeStats, StatusSnapshot, UNKNOWN_IP, UPDATES_STATUS};
pub use updates::UpdateStatus;
pub use uptime::Uptime;
