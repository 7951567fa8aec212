use serde::{Deserialize, Serialize};

/// Where and how to reach the Pi-hole summary endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PiholeConfig {
    /// Appliance host (`host` or `host:port`). When unset the local IP
    /// address of this machine is used.
    #[serde(default)]
    pub host: Option<String>,

    /// Explicit API token. Takes precedence over `setup_vars_path`.
    #[serde(default)]
    pub api_token: Option<String>,

    /// File holding the `WEBPASSWORD=` token (default: /etc/pihole/setupVars.conf)
    #[serde(default = "default_setup_vars_path")]
    pub setup_vars_path: String,

    /// HTTP timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Address used to discover the outbound interface (default: 8.8.8.8:80).
    /// Nothing is sent to it.
    #[serde(default = "default_probe_address")]
    pub probe_address: String,
}

impl Default for PiholeConfig {
    fn default() -> Self {
        Self {
            host: None,
            api_token: None,
            setup_vars_path: default_setup_vars_path(),
            timeout_secs: default_timeout_secs(),
            probe_address: default_probe_address(),
        }
    }
}

fn default_setup_vars_path() -> String {
    "/etc/pihole/setupVars.conf".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_probe_address() -> String {
    "8.8.8.8:80".to_string()
}
