//! Page-to-report parsing.

use ice_common::{IceStatus, SurfaceCondition};
use tracing::debug;

use crate::classify::{classify_status, classify_surface};
use crate::extract::{extract_last_updated, extract_status_message, extract_thickness};
use crate::resolve::source_names;

/// Message stored when the page only carries its blanket "ice not
/// thick enough" notice. ASCII, matching the feed's own degraded
/// spelling.
pub const GENERIC_NO_ICE_MESSAGE: &str = "Isen ar inte tillrackligt tjock for vara maskiner.";

/// One lake's report as read off the status page, before it is matched
/// against the registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReport {
    pub source_name: String,
    pub status: IceStatus,
    pub surface_condition: Option<SurfaceCondition>,
    pub ice_thickness_cm: Option<i32>,
    pub raw_text: String,
    pub last_updated: Option<String>,
}

/// Parse normalized page text into per-lake reports.
///
/// A lake is reported only when the page mentions it. A mentioned lake
/// with no extractable segment falls back to the page-wide "ice not
/// thick enough" notice when one is present, and is skipped otherwise.
pub fn parse_page(text: &str) -> Vec<ParsedReport> {
    let lower = text.to_lowercase();
    let page_no_ice = lower.contains("inte tillr");
    let page_updated = extract_last_updated(text);

    let mut reports = Vec::new();
    for name in source_names() {
        if !lower.contains(&name.to_lowercase()) {
            continue;
        }

        let (message, status) = match extract_status_message(text, name) {
            Some(message) if !message.is_empty() => {
                let status = classify_status(&message);
                (message, status)
            }
            _ if page_no_ice => (GENERIC_NO_ICE_MESSAGE.to_string(), IceStatus::NoIce),
            _ => {
                debug!(lake = name, "mentioned without a readable segment, skipping");
                continue;
            }
        };

        reports.push(ParsedReport {
            source_name: name.to_string(),
            status,
            surface_condition: classify_surface(&message),
            ice_thickness_cm: extract_thickness(&message),
            raw_text: message,
            last_updated: page_updated.clone(),
        });
    }
    reports
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_segments_for_mentioned_lakes() {
        let text = "VASTERORT Kyrksjon Aktuella upplysningar: Isbanan ar plogad och preparerad, 15 cm. \
                    Judarn Aktuella upplysningar: Ingen is annu.";
        let reports = parse_page(text);
        assert_eq!(reports.len(), 2);

        let kyrksjon = reports.iter().find(|r| r.source_name == "Kyrksjon").unwrap();
        assert_eq!(kyrksjon.status, IceStatus::Safe);
        assert_eq!(kyrksjon.surface_condition, Some(SurfaceCondition::Plowed));
        assert_eq!(kyrksjon.ice_thickness_cm, Some(15));

        let judarn = reports.iter().find(|r| r.source_name == "Judarn").unwrap();
        assert_eq!(judarn.status, IceStatus::NoIce);
        assert_eq!(judarn.ice_thickness_cm, None);
    }

    #[test]
    fn unmentioned_lakes_are_absent() {
        let text = "Trekanten Aktuella upplysningar: Plogad bana.";
        let reports = parse_page(text);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].source_name, "Trekanten");
    }

    #[test]
    fn mentioned_lake_without_segment_uses_page_notice() {
        let text = "Drevviken ligger i soder. Isen ar inte tillrackligt tjock for vara maskiner.";
        let reports = parse_page(text);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].source_name, "Drevviken");
        assert_eq!(reports[0].status, IceStatus::NoIce);
        assert_eq!(reports[0].raw_text, GENERIC_NO_ICE_MESSAGE);
    }

    #[test]
    fn mentioned_lake_without_segment_or_notice_is_skipped() {
        let text = "Drevviken ligger i soder om Stockholm.";
        assert!(parse_page(text).is_empty());
    }

    #[test]
    fn page_stamp_is_attached_to_every_report() {
        let text = "Uppdaterad: 12 januari 2025, klockan 08:15. \
                    Trekanten Aktuella upplysningar: Plogad bana. \
                    Judarn Aktuella upplysningar: Stangd.";
        let reports = parse_page(text);
        assert_eq!(reports.len(), 2);
        for report in &reports {
            assert_eq!(report.last_updated.as_deref(), Some("12 januari 2025 08:15"));
        }
    }

    #[test]
    fn empty_page_yields_no_reports() {
        assert!(parse_page("").is_empty());
    }
}
