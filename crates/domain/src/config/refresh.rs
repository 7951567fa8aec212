use serde::{Deserialize, Serialize};

/// Intervals offered by the on-device interval menu, in minutes.
pub const INTERVAL_CHOICES: [u32; 8] = [1, 5, 10, 30, 60, 120, 240, 0];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshConfig {
    /// Minutes between refreshes; 0 disables the timer (default: 30)
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u32,

    /// Advance to the next page on every refresh (default: true)
    #[serde(default = "default_auto_rotate")]
    pub auto_rotate: bool,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_minutes: default_interval_minutes(),
            auto_rotate: default_auto_rotate(),
        }
    }
}

fn default_interval_minutes() -> u32 {
    30
}

fn default_auto_rotate() -> bool {
    true
}
