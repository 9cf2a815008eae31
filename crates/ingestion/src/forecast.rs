//! Weather-based ice forecasts.
//!
//! For every lake with a centroid, fetch a 7-day hourly series of
//! temperature and wind, reduce it to averages and freezing hours, and
//! append a forecast report valid for six hours. Thresholds operate on
//! the raw averages; only the stored values are rounded.

use std::time::{Duration, Instant};

use ice_common::{ForecastQuality, ForecastSummary, IceStatus, Lake, Point};
use serde::Deserialize;
use storage::{Catalog, NewIceReport};
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::error::{IngestionError, Result};

const PAUSE_BETWEEN_LAKES_MS: u64 = 100;
const VALIDITY_HOURS: i64 = 6;

/// Client for the hourly weather forecast API.
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    hourly: HourlySeries,
}

#[derive(Debug, Deserialize)]
struct HourlySeries {
    temperature_2m: Vec<f64>,
    windspeed_10m: Vec<f64>,
}

impl WeatherClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| IngestionError::WeatherFetch(format!("client setup: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    async fn fetch_hourly(&self, lat: f64, lon: f64) -> Result<HourlySeries> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("latitude", lat.to_string()),
                ("longitude", lon.to_string()),
                ("hourly", "temperature_2m,windspeed_10m".to_string()),
                ("forecast_days", "7".to_string()),
                ("timezone", "Europe/Stockholm".to_string()),
            ])
            .send()
            .await
            .map_err(|e| IngestionError::WeatherFetch(e.to_string()))?;

        if !response.status().is_success() {
            return Err(IngestionError::WeatherFetch(format!(
                "weather API returned {}",
                response.status()
            )));
        }

        let body: WeatherResponse = response
            .json()
            .await
            .map_err(|e| IngestionError::WeatherParse(e.to_string()))?;
        Ok(body.hourly)
    }
}

/// Run one forecast pass over every lake with a known centroid.
pub async fn run_forecast(client: &WeatherClient, catalog: &Catalog) -> ForecastSummary {
    let started = Instant::now();
    let mut summary = ForecastSummary {
        success: true,
        ..ForecastSummary::default()
    };

    let lakes = match catalog.list_lakes().await {
        Ok(lakes) => lakes,
        Err(e) => {
            error!(error = %e, "Failed to list lakes for forecasting");
            summary.success = false;
            summary.duration_ms = started.elapsed().as_millis() as u64;
            record_run(catalog, &summary).await;
            return summary;
        }
    };

    for lake in &lakes {
        let Some(centroid) = lake.centroid.as_ref() else {
            debug!(lake = %lake.name, "No centroid, skipping forecast");
            continue;
        };

        match forecast_lake(client, catalog, lake, centroid).await {
            Ok(()) => {
                summary.forecasts_generated += 1;
                // Small delay between calls to respect the API's rate limits.
                sleep(Duration::from_millis(PAUSE_BETWEEN_LAKES_MS)).await;
            }
            Err(e) => {
                warn!(lake = %lake.name, error = %e, "Forecast failed, skipping lake");
            }
        }
    }

    summary.duration_ms = started.elapsed().as_millis() as u64;
    record_run(catalog, &summary).await;
    summary
}

async fn forecast_lake(
    client: &WeatherClient,
    catalog: &Catalog,
    lake: &Lake,
    centroid: &Point,
) -> Result<()> {
    let series = client.fetch_hourly(centroid.lat(), centroid.lon()).await?;

    let Some(metrics) = summarize(&series.temperature_2m, &series.windspeed_10m) else {
        return Err(IngestionError::WeatherParse("empty hourly series".to_string()));
    };
    let quality = ice_quality(&metrics);
    let status = predicted_status(&metrics, quality);

    let report = NewIceReport {
        status,
        ice_thickness_cm: None,
        surface_condition: None,
        temperature_avg: Some(round1(metrics.avg_temp)),
        wind_speed_avg: Some(round1(metrics.avg_wind)),
        raw_text: Some(format!(
            "7-day forecast: {} freezing hours, avg temp {:.1}°C, avg wind {:.1} m/s",
            metrics.freezing_hours, metrics.avg_temp, metrics.avg_wind
        )),
        valid_until: Some(chrono::Utc::now() + chrono::Duration::hours(VALIDITY_HOURS)),
    };
    catalog.insert_forecast_report(lake.id, &report).await?;

    info!(lake = %lake.name, status = %status, quality = %quality, "Forecast report written");
    Ok(())
}

async fn record_run(catalog: &Catalog, summary: &ForecastSummary) {
    let status = if summary.success { "success" } else { "failed" };
    let detail = serde_json::to_value(summary).ok();
    if let Err(e) = catalog
        .record_job_run(
            "forecast",
            status,
            summary.forecasts_generated as i32,
            summary.duration_ms as i64,
            detail,
        )
        .await
    {
        warn!(error = %e, "Failed to record forecast job run");
    }
}

struct SeriesMetrics {
    avg_temp: f64,
    avg_wind: f64,
    freezing_hours: usize,
    hours: usize,
}

fn summarize(temps: &[f64], winds: &[f64]) -> Option<SeriesMetrics> {
    if temps.is_empty() || winds.is_empty() {
        return None;
    }
    let avg_temp = temps.iter().sum::<f64>() / temps.len() as f64;
    let avg_wind = winds.iter().sum::<f64>() / winds.len() as f64;
    let freezing_hours = temps.iter().filter(|t| **t < 0.0).count();
    Some(SeriesMetrics {
        avg_temp,
        avg_wind,
        freezing_hours,
        hours: temps.len(),
    })
}

fn ice_quality(metrics: &SeriesMetrics) -> ForecastQuality {
    let hours = metrics.hours as f64;
    if metrics.avg_temp < -5.0 && metrics.avg_wind < 5.0 && metrics.freezing_hours as f64 > hours * 0.8
    {
        return ForecastQuality::Good;
    }
    if metrics.avg_temp < 0.0 && metrics.avg_wind < 10.0 && metrics.freezing_hours as f64 > hours * 0.5
    {
        return ForecastQuality::Moderate;
    }
    ForecastQuality::Poor
}

fn predicted_status(metrics: &SeriesMetrics, quality: ForecastQuality) -> IceStatus {
    if quality == ForecastQuality::Good && metrics.freezing_hours > 100 {
        IceStatus::Safe
    } else if quality == ForecastQuality::Poor || metrics.avg_temp > 2.0 {
        IceStatus::Warning
    } else {
        IceStatus::Uncertain
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(temps: &[f64], winds: &[f64]) -> SeriesMetrics {
        summarize(temps, winds).unwrap()
    }

    #[test]
    fn deep_cold_week_forecasts_safe() {
        let temps = vec![-8.0; 168];
        let winds = vec![2.0; 168];
        let m = metrics(&temps, &winds);
        let quality = ice_quality(&m);
        assert_eq!(quality, ForecastQuality::Good);
        assert_eq!(predicted_status(&m, quality), IceStatus::Safe);
    }

    #[test]
    fn good_quality_needs_more_than_100_freezing_hours() {
        let mut temps = vec![-8.0; 100];
        temps.extend(vec![3.0; 20]);
        let winds = vec![3.0; 120];
        let m = metrics(&temps, &winds);
        let quality = ice_quality(&m);
        assert_eq!(quality, ForecastQuality::Good);
        assert_eq!(m.freezing_hours, 100);
        assert_eq!(predicted_status(&m, quality), IceStatus::Uncertain);
    }

    #[test]
    fn mild_freeze_is_moderate_and_uncertain() {
        let mut temps = vec![-3.0; 100];
        temps.extend(vec![1.0; 68]);
        let winds = vec![6.0; 168];
        let m = metrics(&temps, &winds);
        let quality = ice_quality(&m);
        assert_eq!(quality, ForecastQuality::Moderate);
        assert_eq!(predicted_status(&m, quality), IceStatus::Uncertain);
    }

    #[test]
    fn warm_week_is_poor_and_warning() {
        let temps = vec![5.0; 168];
        let winds = vec![3.0; 168];
        let m = metrics(&temps, &winds);
        let quality = ice_quality(&m);
        assert_eq!(quality, ForecastQuality::Poor);
        assert_eq!(predicted_status(&m, quality), IceStatus::Warning);
    }

    #[test]
    fn windy_cold_week_downgrades_quality() {
        let temps = vec![-8.0; 168];
        let winds = vec![9.0; 168];
        let m = metrics(&temps, &winds);
        assert_eq!(ice_quality(&m), ForecastQuality::Moderate);
    }

    #[test]
    fn empty_series_yields_no_metrics() {
        assert!(summarize(&[], &[]).is_none());
        assert!(summarize(&[-1.0], &[]).is_none());
    }

    #[test]
    fn stored_averages_round_to_one_decimal() {
        assert_eq!(round1(-3.456), -3.5);
        assert_eq!(round1(1.04), 1.0);
        assert_eq!(round1(0.25), 0.3);
    }
}
