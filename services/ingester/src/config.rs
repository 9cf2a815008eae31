//! Ingester configuration.

use anyhow::{Context, Result};
use std::env;

/// Top-level ingester configuration.
#[derive(Debug, Clone)]
pub struct IngesterConfig {
    /// Database connection URL
    pub database_url: String,

    /// Redis URL for report change events. Absent means the in-process
    /// bus, which is fine for a single-service deployment.
    pub redis_url: Option<String>,

    /// Official skating status page to scrape
    pub status_page_url: String,

    /// Weather forecast API base URL
    pub weather_api_url: String,
}

impl IngesterConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let database_url =
            env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let redis_url = env::var("REDIS_URL").ok();

        let status_page_url = env::var("STATUS_PAGE_URL")
            .unwrap_or_else(|_| "https://sites.google.com/view/isarna".to_string());

        let weather_api_url = env::var("WEATHER_API_URL")
            .unwrap_or_else(|_| "https://api.open-meteo.com/v1/forecast".to_string());

        Ok(Self {
            database_url,
            redis_url,
            status_page_url,
            weather_api_url,
        })
    }
}
