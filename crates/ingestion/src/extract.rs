//! Field extraction from normalized page text.
//!
//! Each extractor is independent and non-fatal: a miss yields `None`
//! and the report field stays empty.

use regex::Regex;

/// First number followed by a length unit, accepted only inside the
/// open range (0, 100) cm. Anything else reads as "not stated".
pub fn extract_thickness(text: &str) -> Option<i32> {
    let re = Regex::new(r"(?i)(\d+)\s*(?:cm|centimeter)").ok()?;
    let value: i32 = re.captures(text)?.get(1)?.as_str().parse().ok()?;
    if value > 0 && value < 100 {
        Some(value)
    } else {
        None
    }
}

/// The page-level "last updated" stamp, joined as `"<date> <time>"`.
pub fn extract_last_updated(text: &str) -> Option<String> {
    let re = Regex::new(r"(?i)uppdaterad[:\s]+(\d+\s+\w+\s+\d{4})[,\s]+klockan\s+(\d{1,2}:\d{2})")
        .ok()?;
    let captures = re.captures(text)?;
    Some(format!(
        "{} {}",
        captures.get(1)?.as_str(),
        captures.get(2)?.as_str()
    ))
}

/// A lake's "current information" segment.
///
/// Locates the first occurrence of the lake name, then the labeled
/// marker after it, and takes the text up to the first sentence
/// terminator. A trailing section heading or track-length field is cut
/// off so one lake's entry never bleeds into the next.
pub fn extract_status_message(page_text: &str, lake_name: &str) -> Option<String> {
    let pattern = format!(
        r"(?is){}.*?Aktuella upply?sningar[:\s]+([^.!?]+[.!?]?)",
        regex::escape(lake_name)
    );
    let re = Regex::new(&pattern).ok()?;
    let raw = re.captures(page_text)?.get(1)?.as_str();
    let mut message = raw.trim().to_string();

    let section_break = Regex::new(r"(?i)Banans l|sjoisbana|SODERORT|VASTERORT").ok()?;
    if let Some(stop) = section_break.find(&message) {
        if stop.start() > 0 {
            message.truncate(stop.start());
            let trimmed = message.trim_end().len();
            message.truncate(trimmed);
        }
    }
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thickness_inside_sentence() {
        assert_eq!(extract_thickness("Isen ar ca 15 cm tjock."), Some(15));
        assert_eq!(extract_thickness("uppmatt till 20centimeter"), Some(20));
    }

    #[test]
    fn thickness_skips_numbers_without_unit() {
        assert_eq!(extract_thickness("Banans langd 3 km, istjocklek 18 cm."), Some(18));
    }

    #[test]
    fn thickness_rejects_out_of_range() {
        assert_eq!(extract_thickness("0 cm"), None);
        assert_eq!(extract_thickness("100 cm"), None);
        assert_eq!(extract_thickness("150 cm vid land"), None);
    }

    #[test]
    fn out_of_range_first_match_yields_none() {
        // Only the first unit-bearing number is considered.
        assert_eq!(extract_thickness("120 cm sno ovanpa 15 cm is"), None);
    }

    #[test]
    fn thickness_absent() {
        assert_eq!(extract_thickness("Ingen matning gjord."), None);
    }

    #[test]
    fn updated_stamp_parses() {
        let text = "Sidan uppdaterad: 15 januari 2025, klockan 14:30 av forvaltningen";
        assert_eq!(
            extract_last_updated(text),
            Some("15 januari 2025 14:30".to_string())
        );
    }

    #[test]
    fn updated_stamp_absent() {
        assert_eq!(extract_last_updated("Ingen tidsstampel har."), None);
    }

    #[test]
    fn segment_stops_at_sentence_end() {
        let page = "Judarn Aktuella upplysningar: Ingen is annu. Kyrksjon Aktuella upplysningar: Plogad bana!";
        assert_eq!(
            extract_status_message(page, "Judarn"),
            Some("Ingen is annu.".to_string())
        );
        assert_eq!(
            extract_status_message(page, "Kyrksjon"),
            Some("Plogad bana!".to_string())
        );
    }

    #[test]
    fn segment_truncates_at_track_length_field() {
        let page = "Flaten Aktuella upplysningar: Plogad och fin is Banans langd 5 km";
        assert_eq!(
            extract_status_message(page, "Flaten"),
            Some("Plogad och fin is".to_string())
        );
    }

    #[test]
    fn segment_truncates_at_section_heading() {
        let page = "Judarn Aktuella upplysningar: Matning pagar VASTERORT Kyrksjon Aktuella upplysningar: Stangd.";
        assert_eq!(
            extract_status_message(page, "Judarn"),
            Some("Matning pagar".to_string())
        );
    }

    #[test]
    fn segment_matches_case_insensitively() {
        let page = "KYRKSJON Aktuella Upplysningar: bra is.";
        assert_eq!(
            extract_status_message(page, "Kyrksjon"),
            Some("bra is.".to_string())
        );
    }

    #[test]
    fn segment_absent_yields_none() {
        assert_eq!(extract_status_message("Drevviken utan rubrik", "Drevviken"), None);
        assert_eq!(
            extract_status_message("Judarn Aktuella upplysningar: Stangd.", "Vattern"),
            None
        );
    }
}
