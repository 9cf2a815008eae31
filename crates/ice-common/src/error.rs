//! Error types for icewatch services.

use thiserror::Error;

/// Result type alias using IceError.
pub type IceResult<T> = Result<T, IceError>;

/// Primary error type for lake status operations.
#[derive(Debug, Error)]
pub enum IceError {
    // === Domain Errors ===
    #[error("Lake not found: {0}")]
    LakeNotFound(String),

    #[error("Unknown ice status: {0}")]
    UnknownStatus(String),

    #[error("Unknown report source: {0}")]
    UnknownSource(String),

    #[error("Unknown surface condition: {0}")]
    UnknownSurface(String),

    // === Storage Errors ===
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Event bus error: {0}")]
    EventBusError(String),

    // === Consumer Errors ===
    #[error("Refresh failed: {0}")]
    RefreshFailed(String),

    // === Infrastructure Errors ===
    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IceError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            IceError::LakeNotFound(_) => 404,
            IceError::RefreshFailed(_) => 502,
            IceError::ServiceUnavailable(_) => 503,
            _ => 500,
        }
    }
}

// Conversion from common error types
impl From<std::io::Error> for IceError {
    fn from(err: std::io::Error) -> Self {
        IceError::InternalError(err.to_string())
    }
}

impl From<serde_json::Error> for IceError {
    fn from(err: serde_json::Error) -> Self {
        IceError::InternalError(format!("JSON error: {}", err))
    }
}
