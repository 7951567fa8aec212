use async_trait::async_trait;
use pistats_domain::{DomainError, Uptime};

/// Local machine figures shown on the uptime page.
#[async_trait]
pub trait SystemProbe: Send + Sync {
    async fn uptime(&self) -> Result<Uptime, DomainError>;

    /// Used memory as display text, e.g. `"34%"`.
    async fn memory_usage(&self) -> Result<String, DomainError>;

    /// SoC temperature as display text, e.g. `"48.3C"`.
    async fn temperature(&self) -> Result<String, DomainError>;
}
