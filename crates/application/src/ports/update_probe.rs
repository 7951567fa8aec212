use async_trait::async_trait;
use pistats_domain::UpdateStatus;

#[async_trait]
pub trait UpdateProbe: Send + Sync {
    /// Sources that cannot be checked report no pending update.
    async fn check(&self) -> UpdateStatus;
}
