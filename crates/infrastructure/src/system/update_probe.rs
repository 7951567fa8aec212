use async_trait::async_trait;
use fancy_regex::Regex;
use pistats_application::ports::UpdateProbe;
use pistats_domain::config::{SystemConfig, UpdatesConfig};
use pistats_domain::UpdateStatus;
use tokio::fs;
use tokio::process::Command;
use tracing::{debug, warn};

const VERSION_PATTERN: &str = r"v(\d+\.\d+\.\d+)\s+\(Latest:\s+v(\d+\.\d+\.\d+)\)";

/// Checks DietPi marker files and `pihole -v` for pending updates.
pub struct MarkerUpdateProbe {
    os_markers: Vec<String>,
    apt_marker: String,
    pihole_command: String,
}

impl MarkerUpdateProbe {
    pub fn new(system: &SystemConfig, updates: &UpdatesConfig) -> Self {
        Self {
            os_markers: system.os_update_markers.clone(),
            apt_marker: system.apt_update_marker.clone(),
            pihole_command: updates.pihole_command.clone(),
        }
    }

    async fn any_exists(paths: &[String]) -> bool {
        for path in paths {
            if marker_exists(path).await {
                return true;
            }
        }
        false
    }

    async fn pihole_outdated(&self) -> bool {
        let output = match Command::new(&self.pihole_command).arg("-v").output().await {
            Ok(output) if output.status.success() => output,
            Ok(output) => {
                debug!(status = %output.status, "pihole -v exited with failure");
                return false;
            }
            Err(e) => {
                debug!(command = %self.pihole_command, error = %e, "pihole -v could not run");
                return false;
            }
        };

        pihole_update_available(&String::from_utf8_lossy(&output.stdout))
    }
}

async fn marker_exists(path: &str) -> bool {
    match fs::try_exists(path).await {
        Ok(exists) => exists,
        Err(e) => {
            debug!(path, error = %e, "Update marker not accessible");
            false
        }
    }
}

#[async_trait]
impl UpdateProbe for MarkerUpdateProbe {
    async fn check(&self) -> UpdateStatus {
        let status = UpdateStatus {
            os: Self::any_exists(&self.os_markers).await,
            apt: marker_exists(&self.apt_marker).await,
            pihole: self.pihole_outdated().await,
        };
        debug!(?status, "Update check finished");
        status
    }
}

/// True when any component line of `pihole -v` reports a current version
/// that differs from its `Latest:` version.
pub fn pihole_update_available(output: &str) -> bool {
    let re = match Regex::new(VERSION_PATTERN) {
        Ok(re) => re,
        Err(e) => {
            warn!(error = %e, "Invalid version pattern");
            return false;
        }
    };

    re.captures_iter(output)
        .filter_map(Result::ok)
        .any(|caps| match (caps.get(1), caps.get(2)) {
            (Some(current), Some(latest)) => current.as_str() != latest.as_str(),
            _ => false,
        })
}
