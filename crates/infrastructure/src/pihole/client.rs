use super::local_ip::detect_local_ip;
use super::setup_vars::read_token;
use super::summary::SummaryResponse;
use async_trait::async_trait;
use pistats_application::ports::StatsSource;
use pistats_domain::config::PiholeConfig;
use pistats_domain::{DomainError, PiholeStats};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for the appliance's `admin/api.php?summary` endpoint.
pub struct PiholeApiClient {
    client: reqwest::Client,
    host: Option<String>,
    api_token: Option<String>,
    setup_vars_path: PathBuf,
    probe_address: String,
}

impl PiholeApiClient {
    pub fn new(config: &PiholeConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DomainError::Http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            host: config.host.clone(),
            api_token: config.api_token.clone(),
            setup_vars_path: PathBuf::from(&config.setup_vars_path),
            probe_address: config.probe_address.clone(),
        })
    }

    async fn token(&self) -> Result<String, DomainError> {
        match &self.api_token {
            Some(token) => Ok(token.clone()),
            None => read_token(&self.setup_vars_path).await,
        }
    }
}

#[async_trait]
impl StatsSource for PiholeApiClient {
    #[instrument(skip(self), name = "pihole_fetch_stats")]
    async fn fetch_stats(&self) -> Result<PiholeStats, DomainError> {
        // Resolve the token before any network activity.
        let token = self.token().await?;

        let ip_address = detect_local_ip(&self.probe_address).await;
        let host = self.host.as_deref().unwrap_or(&ip_address);
        let endpoint = format!("http://{}/admin/api.php", host);

        debug!(%endpoint, "Requesting summary");

        let response = self
            .client
            .get(format!("{}?summary&auth={}", endpoint, token))
            .send()
            .await
            .map_err(|e| DomainError::Http(format!("{} unreachable: {}", endpoint, e.without_url())))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Http(format!(
                "{} returned HTTP {}: {}",
                endpoint,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Http(format!("Failed to read summary: {}", e.without_url())))?;

        SummaryResponse::parse(&body)?.into_stats(ip_address)
    }
}
