use serde::{Deserialize, Serialize};

/// Software update checks and the on-device "Update Software" action.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdatesConfig {
    /// Allow installing updates from the device menu (default: true)
    #[serde(default = "default_allow_install")]
    pub allow_install: bool,

    /// Pi-hole CLI used for version checks and upgrades (default: "pihole")
    #[serde(default = "default_pihole_command")]
    pub pihole_command: String,
}

impl Default for UpdatesConfig {
    fn default() -> Self {
        Self {
            allow_install: default_allow_install(),
            pihole_command: default_pihole_command(),
        }
    }
}

fn default_allow_install() -> bool {
    true
}

fn default_pihole_command() -> String {
    "pihole".to_string()
}
