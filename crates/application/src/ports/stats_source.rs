use async_trait::async_trait;
use pistats_domain::{DomainError, PiholeStats};

/// Source of the appliance's daily summary.
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Fetches a fresh summary. No retry is attempted on failure.
    async fn fetch_stats(&self) -> Result<PiholeStats, DomainError>;
}
