//! Authority status page scraping.
//!
//! One run fetches the page, parses every recognized lake, and
//! reconciles each parsed report into the single official report held
//! per lake. Failures for one lake never abort the rest; the run
//! always comes back with a [`ScrapeSummary`].

use std::time::{Duration, Instant};

use ice_common::ScrapeSummary;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use storage::{Catalog, NewIceReport};
use tracing::{error, info, warn};

use crate::error::{IngestionError, Result};
use crate::normalize::normalize_page;
use crate::parse::parse_page;
use crate::resolve::resolve_lake;

const USER_AGENT: &str = "ISAR-Ice-App/1.0 (Stockholm Ice Discovery)";
const FETCH_TIMEOUT_SECS: u64 = 30;

/// HTTP client for the authority status page.
pub struct StatusPageClient {
    http: reqwest::Client,
    page_url: String,
}

impl StatusPageClient {
    pub fn new(page_url: impl Into<String>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("sv-SE,sv;q=0.9,en;q=0.8"),
        );

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .map_err(|e| IngestionError::PageFetch(format!("client setup: {}", e)))?;

        Ok(Self {
            http,
            page_url: page_url.into(),
        })
    }

    /// Fetch the raw page body.
    pub async fn fetch_page(&self) -> Result<String> {
        let response = self
            .http
            .get(&self.page_url)
            .send()
            .await
            .map_err(|e| IngestionError::PageFetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(IngestionError::PageFetch(format!(
                "status page returned {}",
                response.status()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| IngestionError::PageFetch(e.to_string()))
    }
}

/// Run one scrape of the authority status page.
///
/// A page-level failure marks the summary unsuccessful; per-lake
/// storage failures only land in `errors`.
pub async fn run_scrape(client: &StatusPageClient, catalog: &Catalog) -> ScrapeSummary {
    let started = Instant::now();
    let mut summary = ScrapeSummary {
        success: true,
        ..ScrapeSummary::default()
    };

    if let Err(e) = scrape_into(client, catalog, &mut summary).await {
        error!(error = %e, "Scrape run failed");
        summary.success = false;
        summary.errors.push(e.to_string());
    }
    summary.duration_ms = started.elapsed().as_millis() as u64;

    let status = if summary.success { "success" } else { "failed" };
    let detail = serde_json::to_value(&summary).ok();
    if let Err(e) = catalog
        .record_job_run(
            "official",
            status,
            summary.updated as i32,
            summary.duration_ms as i64,
            detail,
        )
        .await
    {
        warn!(error = %e, "Failed to record scrape job run");
    }

    info!(
        processed = summary.processed,
        updated = summary.updated,
        not_found = summary.not_found.len(),
        errors = summary.errors.len(),
        "Scrape finished"
    );
    summary
}

async fn scrape_into(
    client: &StatusPageClient,
    catalog: &Catalog,
    summary: &mut ScrapeSummary,
) -> Result<()> {
    let html = client.fetch_page().await?;
    let text = normalize_page(&html);
    let parsed = parse_page(&text);
    info!(reports = parsed.len(), "Parsed status page");

    let lakes = catalog.list_lakes().await?;

    for report in parsed {
        summary.processed += 1;

        let Some(lake) = resolve_lake(&report.source_name, &lakes) else {
            warn!(name = %report.source_name, "Reported lake not in registry");
            summary.not_found.push(report.source_name);
            continue;
        };

        let new_report = NewIceReport {
            status: report.status,
            ice_thickness_cm: report.ice_thickness_cm,
            surface_condition: report.surface_condition,
            temperature_avg: None,
            wind_speed_avg: None,
            raw_text: Some(format!("{}: {}", lake.name, report.raw_text)),
            valid_until: None,
        };

        match catalog.replace_official_report(lake.id, &new_report).await {
            Ok(_) => {
                summary.updated += 1;
                summary.matched.push(format!("{} ({})", lake.name, report.status));
                info!(lake = %lake.name, status = %report.status, "Updated official report");
            }
            Err(e) => {
                error!(lake = %lake.name, error = %e, "Failed to store report");
                summary.errors.push(format!("{}: {}", report.source_name, e));
            }
        }
    }

    Ok(())
}
