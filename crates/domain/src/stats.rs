use crate::{UpdateStatus, Uptime};
use serde::Serialize;

/// Status text shown instead of the appliance status when updates are pending.
pub const UPDATES_STATUS: &str = "updates!";

/// Placeholder shown when the local IP address cannot be determined.
pub const UNKNOWN_IP: &str = "ERROR?";

/// Pi-hole statistics for the current day, rebuilt on every poll.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PiholeStats {
    pub status: String,
    pub ip_address: String,
    pub ads_blocked: u64,
    pub percentage_blocked: f64,
    pub domains_blocked: String,
    pub dns_queries: u64,
    pub clients: u64,
}

impl PiholeStats {
    /// Status with the first letter of every word upper-cased ("enabled" -> "Enabled").
    pub fn title_status(&self) -> String {
        title_case(&self.status)
    }
}

/// Everything one refresh collects for the status pages.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusSnapshot {
    pub stats: PiholeStats,
    pub uptime: Uptime,
    pub memory: String,
    pub temperature: String,
    pub updates: UpdateStatus,
}

impl StatusSnapshot {
    pub fn new(
        mut stats: PiholeStats,
        uptime: Uptime,
        memory: String,
        temperature: String,
        updates: UpdateStatus,
    ) -> Self {
        if updates.any() {
            stats.status = UPDATES_STATUS.to_string();
        }
        Self {
            stats,
            uptime,
            memory,
            temperature,
            updates,
        }
    }
}

fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(status: &str) -> PiholeStats {
        PiholeStats {
            status: status.to_string(),
            ip_address: "192.168.1.2".to_string(),
            ads_blocked: 42,
            percentage_blocked: 12.5,
            domains_blocked: "120,000".to_string(),
            dns_queries: 336,
            clients: 7,
        }
    }

    #[test]
    fn test_title_status() {
        assert_eq!(stats("enabled").title_status(), "Enabled");
        assert_eq!(stats("DISABLED").title_status(), "Disabled");
        assert_eq!(stats("updates!").title_status(), "Updates!");
    }

    #[test]
    fn test_snapshot_replaces_status_when_updates_pending() {
        let updates = UpdateStatus {
            apt: true,
            ..UpdateStatus::default()
        };
        let snapshot = StatusSnapshot::new(
            stats("enabled"),
            Uptime::default(),
            "10%".to_string(),
            "40.0C".to_string(),
            updates,
        );
        assert_eq!(snapshot.stats.status, UPDATES_STATUS);
    }

    #[test]
    fn test_snapshot_keeps_status_without_updates() {
        let snapshot = StatusSnapshot::new(
            stats("enabled"),
            Uptime::default(),
            "10%".to_string(),
            "40.0C".to_string(),
            UpdateStatus::default(),
        );
        assert_eq!(snapshot.stats.status, "enabled");
    }
}
