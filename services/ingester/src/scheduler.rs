//! Periodic job scheduler: scrape, then forecast, every poll interval.

use std::sync::Arc;
use std::time::Duration;

use ice_common::{ForecastSummary, ScrapeSummary};
use ingestion::{run_forecast, run_scrape};
use tokio::sync::broadcast;
use tracing::{error, info};

use crate::server::ServerState;

/// Job scheduler sharing the server's catalog and clients.
pub struct Scheduler {
    state: Arc<ServerState>,
    poll_interval: Duration,
}

impl Scheduler {
    pub fn new(state: Arc<ServerState>, poll_interval: Duration) -> Self {
        Self {
            state,
            poll_interval,
        }
    }

    /// Run one scrape job.
    pub async fn scrape(&self) -> ScrapeSummary {
        run_scrape(&self.state.page, &self.state.catalog).await
    }

    /// Run one forecast job.
    pub async fn forecast(&self) -> ForecastSummary {
        run_forecast(&self.state.weather, &self.state.catalog).await
    }

    /// Run a single cycle of both jobs. The scrape goes first so the
    /// official rows are current before forecast rows are added.
    pub async fn run_all(&self) {
        let scrape = self.scrape().await;
        if !scrape.success {
            error!(errors = ?scrape.errors, "Scheduled scrape failed");
        }

        let forecast = self.forecast().await;
        if !forecast.success {
            error!("Scheduled forecast failed");
        }
    }

    /// Run continuously, polling until shutdown.
    pub async fn run_forever(&self, mut shutdown: broadcast::Receiver<()>) {
        loop {
            self.run_all().await;

            // Check for shutdown
            tokio::select! {
                _ = shutdown.recv() => {
                    info!("Shutting down scheduler");
                    break;
                }
                _ = tokio::time::sleep(self.poll_interval) => {
                    // Continue polling
                }
            }
        }
    }
}
