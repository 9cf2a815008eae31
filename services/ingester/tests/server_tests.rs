//! Tests for the ingester HTTP server envelopes.
//!
//! The server module is private to the ingester binary, so these tests
//! cover the wire shapes it serves: the job summary envelopes returned
//! by the trigger endpoints and the status/health bodies.

use ice_common::{ForecastSummary, ScrapeSummary};

// ============================================================================
// Trigger endpoint envelope tests
// ============================================================================

/// Body shape served by POST /jobs/scrape, as a trigger client reads it.
#[test]
fn scrape_response_parses_from_wire_json() {
    let json = r#"{
        "success": true,
        "processed": 12,
        "updated": 10,
        "matched": ["Trekanten (safe)", "Flaten (warning)"],
        "notFound": ["Lilla Vartan"],
        "errors": [],
        "durationMs": 840
    }"#;

    let summary: ScrapeSummary = serde_json::from_str(json).unwrap();
    assert!(summary.success);
    assert_eq!(summary.processed, 12);
    assert_eq!(summary.updated, 10);
    assert_eq!(summary.not_found, vec!["Lilla Vartan"]);
    assert_eq!(summary.duration_ms, 840);
}

/// Per-lake errors do not flip the run-level success flag.
#[test]
fn scrape_response_with_partial_errors_is_still_a_success() {
    let json = r#"{
        "success": true,
        "processed": 5,
        "updated": 4,
        "matched": ["Trekanten (safe)"],
        "notFound": [],
        "errors": ["Drevviken: database connection lost"],
        "durationMs": 1320
    }"#;

    let summary: ScrapeSummary = serde_json::from_str(json).unwrap();
    assert!(summary.success);
    assert_eq!(summary.errors.len(), 1);
    assert_eq!(summary.updated, 4);
}

#[test]
fn forecast_response_parses_from_wire_json() {
    let json = r#"{"success": true, "forecastsGenerated": 14, "durationMs": 2150}"#;

    let summary: ForecastSummary = serde_json::from_str(json).unwrap();
    assert!(summary.success);
    assert_eq!(summary.forecasts_generated, 14);
    assert_eq!(summary.duration_ms, 2150);
}

// ============================================================================
// Status and health body tests
// ============================================================================

#[test]
fn status_response_serialization() {
    let response = serde_json::json!({
        "recent": [
            {
                "id": "5e0ad318-4f6c-4f91-a9a4-2f4c7a0c2b11",
                "source": "official",
                "status": "success",
                "lakes_updated": 9,
                "duration_ms": 830,
                "created_at": "2025-01-12T06:00:00Z"
            },
            {
                "id": "9b1cf5d7-3a22-4d55-a3d0-60a4f0f4b7c8",
                "source": "forecast",
                "status": "failed",
                "lakes_updated": 0,
                "duration_ms": 120,
                "created_at": "2025-01-12T05:57:00Z"
            }
        ]
    });

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"source\":\"official\""));
    assert!(json.contains("\"source\":\"forecast\""));
    assert!(json.contains("\"status\":\"failed\""));
}

#[test]
fn health_response_serialization() {
    let response = serde_json::json!({
        "status": "ok",
        "service": "ingester",
        "version": "0.1.0"
    });

    let json = serde_json::to_string(&response).unwrap();
    assert!(json.contains("\"status\":\"ok\""));
    assert!(json.contains("\"service\":\"ingester\""));
}
