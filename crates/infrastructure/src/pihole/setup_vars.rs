use pistats_domain::DomainError;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;
use tracing::debug;

const TOKEN_KEY: &str = "WEBPASSWORD=";

/// Reads the API token from Pi-hole's `setupVars.conf`.
pub async fn read_token(path: &Path) -> Result<String, DomainError> {
    let content = fs::read_to_string(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => DomainError::TokenFileMissing(path.display().to_string()),
        _ => DomainError::IoError(format!("Failed to read {}: {}", path.display(), e)),
    })?;

    let token = parse_token(&content)
        .ok_or_else(|| DomainError::TokenNotFound(path.display().to_string()))?;

    debug!(path = %path.display(), "API token loaded");
    Ok(token)
}

/// Value of the first `WEBPASSWORD=` line. An empty value is returned as is
/// (password-less installs).
pub fn parse_token(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(TOKEN_KEY))
        .map(|value| value.split('=').next().unwrap_or_default().to_string())
}
