//! Staleness decision and the remote refresh trigger.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use ice_common::{IceError, IceResult, ScrapeSummary};

/// Aggregate data older than this is considered stale.
pub const STALE_AFTER_MINUTES: i64 = 30;

/// Whether the newest report across all lakes is too old to trust.
///
/// `None` means no report has ever been written, which reads as stale.
pub fn is_stale(latest: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match latest {
        Some(ts) => now - ts > Duration::minutes(STALE_AFTER_MINUTES),
        None => true,
    }
}

/// Result of one remote refresh invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub success: bool,
    pub message: String,
}

/// Remote trigger for a fresh scrape of the authority page.
///
/// Triggering twice is safe; the scrape reconverges on the same single
/// official row per lake.
#[async_trait]
pub trait RefreshTrigger: Send + Sync {
    async fn refresh(&self) -> IceResult<RefreshOutcome>;
}

/// Trigger that POSTs the ingester's scrape endpoint.
pub struct HttpRefresher {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpRefresher {
    pub fn new(endpoint: impl Into<String>) -> IceResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| IceError::RefreshFailed(format!("client setup: {}", e)))?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl RefreshTrigger for HttpRefresher {
    async fn refresh(&self) -> IceResult<RefreshOutcome> {
        let response = self
            .http
            .post(&self.endpoint)
            .send()
            .await
            .map_err(|e| IceError::RefreshFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(IceError::RefreshFailed(format!(
                "refresh endpoint returned {}",
                response.status()
            )));
        }

        let summary: ScrapeSummary = response
            .json()
            .await
            .map_err(|e| IceError::RefreshFailed(e.to_string()))?;
        Ok(outcome_from_summary(&summary))
    }
}

fn outcome_from_summary(summary: &ScrapeSummary) -> RefreshOutcome {
    RefreshOutcome {
        success: summary.success,
        message: format!(
            "Scraped {} reports, updated {}",
            summary.processed, summary.updated
        ),
    }
}
