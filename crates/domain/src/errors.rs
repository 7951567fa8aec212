use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("setupVars.conf not found at {0}")]
    TokenFileMissing(String),

    #[error("Could not find WEBPASSWORD token in {0}")]
    TokenNotFound(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("Invalid summary response: {0}")]
    InvalidResponse(String),

    #[error("Invalid uptime value: {0}")]
    InvalidUptime(String),

    #[error("Invalid glyph: {0}")]
    InvalidGlyph(String),

    #[error("Hardware error: {0}")]
    Hardware(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Command failed: {0}")]
    Command(String),

    #[error("Software updates are disabled")]
    UpdatesDisabled,
}
