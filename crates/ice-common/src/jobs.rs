//! Result envelopes returned by the batch jobs.
//!
//! Field names serialize in camelCase to match the published job API;
//! database rows elsewhere stay snake_case.

use serde::{Deserialize, Serialize};

/// Outcome of one scrape run over the authority status page.
///
/// `success` reports that the run itself completed; individual lakes may
/// still have failed and show up in `errors`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapeSummary {
    pub success: bool,
    pub processed: usize,
    pub updated: usize,
    pub matched: Vec<String>,
    pub not_found: Vec<String>,
    pub errors: Vec<String>,
    pub duration_ms: u64,
}

/// Outcome of one forecast generation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastSummary {
    pub success: bool,
    pub forecasts_generated: usize,
    pub duration_ms: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrape_summary_uses_camel_case_keys() {
        let summary = ScrapeSummary {
            success: true,
            processed: 3,
            updated: 2,
            matched: vec!["Trekanten (safe)".to_string()],
            not_found: vec!["Magelungen".to_string()],
            errors: vec![],
            duration_ms: 1200,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["notFound"][0], "Magelungen");
        assert_eq!(json["durationMs"], 1200);
        assert!(json.get("not_found").is_none());
    }

    #[test]
    fn forecast_summary_uses_camel_case_keys() {
        let summary = ForecastSummary {
            success: true,
            forecasts_generated: 8,
            duration_ms: 950,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["forecastsGenerated"], 8);
        assert_eq!(json["durationMs"], 950);
    }
}
