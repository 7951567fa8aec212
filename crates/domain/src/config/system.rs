use serde::{Deserialize, Serialize};

/// Local files read for uptime, memory, temperature and update markers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SystemConfig {
    #[serde(default = "default_uptime_path")]
    pub uptime_path: String,

    #[serde(default = "default_meminfo_path")]
    pub meminfo_path: String,

    #[serde(default = "default_thermal_path")]
    pub thermal_path: String,

    /// Any of these existing means an OS update is available
    #[serde(default = "default_os_update_markers")]
    pub os_update_markers: Vec<String>,

    #[serde(default = "default_apt_update_marker")]
    pub apt_update_marker: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            uptime_path: default_uptime_path(),
            meminfo_path: default_meminfo_path(),
            thermal_path: default_thermal_path(),
            os_update_markers: default_os_update_markers(),
            apt_update_marker: default_apt_update_marker(),
        }
    }
}

fn default_uptime_path() -> String {
    "/proc/uptime".to_string()
}

fn default_meminfo_path() -> String {
    "/proc/meminfo".to_string()
}

fn default_thermal_path() -> String {
    "/sys/class/thermal/thermal_zone0/temp".to_string()
}

fn default_os_update_markers() -> Vec<String> {
    vec![
        "/run/dietpi/.update_available".to_string(),
        "/run/dietpi/.live_patches".to_string(),
    ]
}

fn default_apt_update_marker() -> String {
    "/run/dietpi/.apt_updates".to_string()
}
