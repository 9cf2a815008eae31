//! HTTP server for the ingester service.
//!
//! Provides endpoints for:
//! - `POST /jobs/scrape` - Run the official status page scrape
//! - `POST /jobs/forecast` - Run the weather forecast job
//! - `GET /status` - Recent job runs
//! - `GET /health` - Health check

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use ingestion::{run_forecast, run_scrape, StatusPageClient, WeatherClient};
use storage::{Catalog, JobRun};

/// Job log entries returned by /status.
const RECENT_RUNS: i64 = 20;

/// Shared state for the HTTP server.
pub struct ServerState {
    /// Report store
    pub catalog: Arc<Catalog>,
    /// Official status page client
    pub page: StatusPageClient,
    /// Weather API client
    pub weather: WeatherClient,
}

/// Response for /status endpoint.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub recent: Vec<JobRun>,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
}

/// POST /jobs/scrape - Run the official status page scrape.
///
/// Safe to re-trigger: each run replaces the single official row per
/// lake, so concurrent or repeated runs converge on the same state.
/// Partial failures still return 200 with the errors in the summary.
async fn scrape_handler(Extension(state): Extension<Arc<ServerState>>) -> impl IntoResponse {
    info!("Received scrape trigger");

    let summary = run_scrape(&state.page, &state.catalog).await;
    let code = if summary.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (code, Json(summary))
}

/// POST /jobs/forecast - Run the weather forecast job.
async fn forecast_handler(Extension(state): Extension<Arc<ServerState>>) -> impl IntoResponse {
    info!("Received forecast trigger");

    let summary = run_forecast(&state.weather, &state.catalog).await;
    let code = if summary.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (code, Json(summary))
}

/// GET /status - Recent job runs from the job log
async fn status_handler(Extension(state): Extension<Arc<ServerState>>) -> impl IntoResponse {
    match state.catalog.recent_job_runs(RECENT_RUNS).await {
        Ok(recent) => (StatusCode::OK, Json(StatusResponse { recent })).into_response(),
        Err(e) => {
            error!(error = %e, "Job log query failed");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// GET /health - Health check
async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        service: "ingester".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Build the HTTP router.
pub fn build_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/jobs/scrape", post(scrape_handler))
        .route("/jobs/forecast", post(forecast_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Start the HTTP server.
pub async fn start_server(state: Arc<ServerState>, port: u16) -> anyhow::Result<()> {
    let app = build_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(port = port, "Starting ingester HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
