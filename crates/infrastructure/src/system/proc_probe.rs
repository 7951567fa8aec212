use async_trait::async_trait;
use pistats_application::ports::SystemProbe;
use pistats_domain::config::SystemConfig;
use pistats_domain::{DomainError, Uptime};
use tokio::fs;
use tracing::debug;

/// Reads uptime, memory and temperature from procfs and sysfs.
pub struct ProcSystemProbe {
    uptime_path: String,
    meminfo_path: String,
    thermal_path: String,
}

impl ProcSystemProbe {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            uptime_path: config.uptime_path.clone(),
            meminfo_path: config.meminfo_path.clone(),
            thermal_path: config.thermal_path.clone(),
        }
    }
}

impl Default for ProcSystemProbe {
    fn default() -> Self {
        Self::new(&SystemConfig::default())
    }
}

async fn read(path: &str) -> Result<String, DomainError> {
    fs::read_to_string(path)
        .await
        .map_err(|e| DomainError::IoError(format!("Failed to read {}: {}", path, e)))
}

#[async_trait]
impl SystemProbe for ProcSystemProbe {
    async fn uptime(&self) -> Result<Uptime, DomainError> {
        let uptime = Uptime::parse_proc(&read(&self.uptime_path).await?)?;
        debug!(%uptime, "Uptime read");
        Ok(uptime)
    }

    async fn memory_usage(&self) -> Result<String, DomainError> {
        let used = parse_meminfo(&read(&self.meminfo_path).await?)?;
        Ok(format!("{:.0}%", used))
    }

    async fn temperature(&self) -> Result<String, DomainError> {
        format_temperature(&read(&self.thermal_path).await?)
    }
}

/// Used memory in percent: `(MemTotal - MemAvailable) / MemTotal`.
///
/// Kernels without `MemAvailable` fall back to `MemFree + Buffers + Cached`.
pub fn parse_meminfo(content: &str) -> Result<f64, DomainError> {
    let field = |name: &str| -> Option<u64> {
        content.lines().find_map(|line| {
            let rest = line.strip_prefix(name)?.strip_prefix(':')?;
            rest.split_whitespace().next()?.parse().ok()
        })
    };

    let total = field("MemTotal")
        .filter(|total| *total > 0)
        .ok_or_else(|| DomainError::IoError("MemTotal missing from meminfo".to_string()))?;

    let available = match field("MemAvailable") {
        Some(available) => available,
        None => {
            field("MemFree").unwrap_or(0) + field("Buffers").unwrap_or(0) + field("Cached").unwrap_or(0)
        }
    };

    let used = total.saturating_sub(available);
    Ok(used as f64 * 100.0 / total as f64)
}

/// Formats a thermal zone reading (millidegrees Celsius) as `"48.3C"`.
pub fn format_temperature(content: &str) -> Result<String, DomainError> {
    let millis: i64 = content
        .trim()
        .parse()
        .map_err(|_| DomainError::IoError(format!("Invalid temperature: {}", content.trim())))?;
    Ok(format!("{:.1}C", millis as f64 / 1000.0))
}
