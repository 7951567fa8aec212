use async_trait::async_trait;
use pistats_domain::{DomainError, UpdateStatus};

#[async_trait]
pub trait SoftwareUpdater: Send + Sync {
    /// Installs the pending updates flagged in `updates`, stopping at the
    /// first failing step.
    async fn install(&self, updates: UpdateStatus) -> Result<(), DomainError>;
}
