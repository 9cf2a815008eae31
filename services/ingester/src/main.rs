//! Lake ice ingester service.
//!
//! Scrapes the official Stockholm skating status page and pulls weather
//! forecasts, writing per-lake ice reports to the report store. Runs
//! either as a one-shot job or as a long-lived service with HTTP
//! trigger endpoints and a polling scheduler.

mod config;
mod scheduler;
mod server;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::sync::broadcast;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use ingestion::{StatusPageClient, WeatherClient};
use storage::{seed_lakes, Catalog, EventBus, MemoryEventBus, RedisEventBus};

use config::IngesterConfig;
use scheduler::Scheduler;
use server::ServerState;

#[derive(Parser, Debug)]
#[command(name = "ingester")]
#[command(about = "Lake ice report ingester for the skate status services")]
struct Args {
    /// Run once and exit (vs continuous polling)
    #[arg(long)]
    once: bool,

    /// Restrict a --once run to one job: "scrape" or "forecast"
    #[arg(short, long)]
    job: Option<String>,

    /// Import the Stockholm lake registry before running jobs
    #[arg(long)]
    seed: bool,

    /// Port for the trigger/status HTTP server
    #[arg(long, env = "INGESTER_PORT", default_value = "8084")]
    port: u16,

    /// Seconds between scheduled job cycles
    #[arg(long, env = "POLL_INTERVAL_SECS", default_value = "180")]
    poll_interval_secs: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_thread_ids(true)
        .json()
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting lake ice ingester");

    // Load configuration
    let config = IngesterConfig::from_env()?;

    // Report change events go over Redis when configured
    let events: Arc<dyn EventBus> = match &config.redis_url {
        Some(url) => Arc::new(RedisEventBus::connect(url).await?),
        None => {
            info!("REDIS_URL not set, using in-process event bus");
            Arc::new(MemoryEventBus::new())
        }
    };

    // Connect the report store and run migrations
    let catalog = Catalog::connect(&config.database_url)
        .await?
        .with_event_bus(events);
    catalog.migrate().await?;
    let catalog = Arc::new(catalog);

    if args.seed {
        let inserted = seed_lakes(&catalog).await?;
        info!(inserted, "Lake registry seeded");
    }

    let state = Arc::new(ServerState {
        catalog,
        page: StatusPageClient::new(config.status_page_url.clone())?,
        weather: WeatherClient::new(config.weather_api_url.clone())?,
    });

    let scheduler = Scheduler::new(state.clone(), Duration::from_secs(args.poll_interval_secs));

    if args.once {
        // Single run mode
        info!("Running single job cycle");

        match args.job.as_deref() {
            None => scheduler.run_all().await,
            Some("scrape") => {
                scheduler.scrape().await;
            }
            Some("forecast") => {
                scheduler.forecast().await;
            }
            Some(other) => {
                anyhow::bail!("unknown job {:?}, expected \"scrape\" or \"forecast\"", other)
            }
        }
    } else {
        // Continuous mode: HTTP triggers plus the polling scheduler
        let server_state = state.clone();
        let port = args.port;
        tokio::spawn(async move {
            if let Err(e) = server::start_server(server_state, port).await {
                tracing::error!(error = %e, "HTTP server failed");
            }
        });

        // Handle Ctrl+C
        let (shutdown_tx, _) = broadcast::channel::<()>(1);
        let shutdown_tx_clone = shutdown_tx.clone();
        tokio::spawn(async move {
            tokio::signal::ctrl_c().await.ok();
            info!("Received shutdown signal");
            shutdown_tx_clone.send(()).ok();
        });

        info!(
            poll_interval_secs = args.poll_interval_secs,
            "Starting continuous polling"
        );
        scheduler.run_forever(shutdown_tx.subscribe()).await;
    }

    Ok(())
}
