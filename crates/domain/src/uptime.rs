use crate::DomainError;
use std::fmt;

const MINUTE: u64 = 60;
const HOUR: u64 = MINUTE * 60;
const DAY: u64 = HOUR * 24;

/// System uptime broken down into whole days, hours and minutes.
///
/// Seconds below a full minute are truncated, so the breakdown never
/// overstates the raw counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Uptime {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
}

impl Uptime {
    pub fn from_secs(total_secs: u64) -> Self {
        Self {
            days: total_secs / DAY,
            hours: (total_secs % DAY) / HOUR,
            minutes: (total_secs % HOUR) / MINUTE,
        }
    }

    /// Builds from the fractional counter found in `/proc/uptime`.
    pub fn from_secs_f64(total_secs: f64) -> Result<Self, DomainError> {
        if !total_secs.is_finite() || total_secs < 0.0 {
            return Err(DomainError::InvalidUptime(total_secs.to_string()));
        }
        Ok(Self::from_secs(total_secs.trunc() as u64))
    }

    /// Parses the contents of `/proc/uptime` (`"<uptime> <idle>"`).
    pub fn parse_proc(contents: &str) -> Result<Self, DomainError> {
        let first = contents
            .split_whitespace()
            .next()
            .ok_or_else(|| DomainError::InvalidUptime("empty uptime file".to_string()))?;

        let secs: f64 = first
            .parse()
            .map_err(|_| DomainError::InvalidUptime(first.to_string()))?;

        Self::from_secs_f64(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.days * DAY + self.hours * HOUR + self.minutes * MINUTE
    }
}

impl fmt::Display for Uptime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D {}H {}M", self.days, self.hours, self.minutes)
    }
}
