use crate::ports::{StatsSource, SystemProbe, UpdateProbe};
use pistats_domain::{DomainError, StatusSnapshot, UpdateStatus};
use std::sync::Arc;
use tracing::{debug, info, warn};

const UNAVAILABLE: &str = "N/A";

/// Use case: gather everything the status pages show.
///
/// A failed appliance fetch or uptime read aborts the refresh; memory and
/// temperature fall back to `N/A` since not every board exposes them.
pub struct CollectSnapshotUseCase {
    stats: Arc<dyn StatsSource>,
    system: Arc<dyn SystemProbe>,
    updates: Arc<dyn UpdateProbe>,
}

impl CollectSnapshotUseCase {
    pub fn new(
        stats: Arc<dyn StatsSource>,
        system: Arc<dyn SystemProbe>,
        updates: Arc<dyn UpdateProbe>,
    ) -> Self {
        Self {
            stats,
            system,
            updates,
        }
    }

    pub async fn execute(&self) -> Result<StatusSnapshot, DomainError> {
        debug!("Collecting status snapshot");

        let stats = self.stats.fetch_stats().await?;
        let uptime = self.system.uptime().await?;

        let memory = self.system.memory_usage().await.unwrap_or_else(|e| {
            warn!(error = %e, "Memory usage unavailable");
            UNAVAILABLE.to_string()
        });
        let temperature = self.system.temperature().await.unwrap_or_else(|e| {
            warn!(error = %e, "Temperature unavailable");
            UNAVAILABLE.to_string()
        });

        let updates = self.check_updates().await;

        info!(
            status = %stats.status,
            ads_blocked = stats.ads_blocked,
            dns_queries = stats.dns_queries,
            updates = updates.any(),
            "Status snapshot refreshed"
        );

        Ok(StatusSnapshot::new(stats, uptime, memory, temperature, updates))
    }

    pub async fn check_updates(&self) -> UpdateStatus {
        let updates = self.updates.check().await;
        if updates.any() {
            info!(modules = ?updates.modules(), "Updates available");
        }
        updates
    }
}
