//! Error types for the ingestion crate.

use thiserror::Error;

/// Errors that can occur during an ingestion run.
#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("Failed to fetch status page: {0}")]
    PageFetch(String),

    #[error("Failed to fetch weather data: {0}")]
    WeatherFetch(String),

    #[error("Failed to parse weather response: {0}")]
    WeatherParse(String),

    #[error("Storage error: {0}")]
    Storage(#[from] ice_common::IceError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestionError>;
