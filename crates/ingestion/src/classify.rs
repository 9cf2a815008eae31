//! Keyword classification of lake status segments.
//!
//! Both classifiers are ordered decision lists: rules are tried top to
//! bottom and the first rule with any matching marker wins, so ties
//! between categories resolve the same way every run.

use ice_common::{IceStatus, SurfaceCondition};

/// Status rules in priority order. Markers are the ASCII cores of the
/// feed's phrases, so they match whether or not the page kept its
/// diacritics ("färdigplogad" and "fardigplogad" both contain
/// "rdigplogad").
// TODO: confirm with the feed owners that safe really should outrank
// warning when a segment carries both kinds of marker.
const STATUS_RULES: &[(IceStatus, &[&str])] = &[
    (
        IceStatus::NoIce,
        &["inte tillr", "ej", "ingen is", "ppet vatten", "smalt", "stangd"],
    ),
    (
        IceStatus::Safe,
        &["plogad", "rdigplogad", "preparerad", "ppen f", "godkand", "bra is"],
    ),
    (
        IceStatus::Warning,
        &["varning", "farlig", "risk", "undvik", "tunn is", "osaker"],
    ),
];

/// Surface rules in priority order.
const SURFACE_RULES: &[(SurfaceCondition, &[&str])] = &[
    (SurfaceCondition::Plowed, &["plogad", "preparerad"]),
    (SurfaceCondition::SnowCovered, &["sno", "snotack"]),
    (SurfaceCondition::Rough, &["ojamn", "grov"]),
    (SurfaceCondition::Smooth, &["slat", "blank", "fin is"]),
];

/// Classify a lake's status segment. Unrecognized text is `uncertain`.
pub fn classify_status(segment: &str) -> IceStatus {
    let text = segment.to_lowercase();
    for (status, markers) in STATUS_RULES {
        if markers.iter().any(|marker| text.contains(marker)) {
            return *status;
        }
    }
    IceStatus::Uncertain
}

/// Classify the surface condition, if the segment mentions one.
pub fn classify_surface(segment: &str) -> Option<SurfaceCondition> {
    let text = segment.to_lowercase();
    for (surface, markers) in SURFACE_RULES {
        if markers.iter().any(|marker| text.contains(marker)) {
            return Some(*surface);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plowed_segment_is_safe() {
        assert_eq!(
            classify_status("Isbanan är färdigplogad och öppen för allmänheten."),
            IceStatus::Safe
        );
    }

    #[test]
    fn safe_outranks_warning_in_mixed_segment() {
        assert_eq!(
            classify_status("Plogad bana, men varning för tunn is vid bryggorna."),
            IceStatus::Safe
        );
    }

    #[test]
    fn no_ice_outranks_safe() {
        assert_eq!(
            classify_status("Plogad tidigare, nu öppet vatten."),
            IceStatus::NoIce
        );
    }

    #[test]
    fn closed_rink_is_no_ice() {
        assert_eq!(classify_status("Banan ar stangd, ingen is annu."), IceStatus::NoIce);
    }

    #[test]
    fn thin_ice_is_warning() {
        assert_eq!(
            classify_status("Undvik isen, tunn is efter regnet."),
            IceStatus::Warning
        );
    }

    #[test]
    fn unrecognized_text_is_uncertain() {
        assert_eq!(classify_status("Matning pagar infor helgen."), IceStatus::Uncertain);
    }

    #[test]
    fn degraded_spelling_still_matches() {
        assert_eq!(classify_status("Banan ar fardigplogad."), IceStatus::Safe);
        assert_eq!(classify_status("ppet vatten vid land."), IceStatus::NoIce);
    }

    #[test]
    fn plowed_surface_wins_over_snow() {
        assert_eq!(
            classify_surface("Plogad bana trots snotacke."),
            Some(SurfaceCondition::Plowed)
        );
    }

    #[test]
    fn snow_covered_surface() {
        assert_eq!(
            classify_surface("Snotackt is efter nattens snofall."),
            Some(SurfaceCondition::SnowCovered)
        );
    }

    #[test]
    fn rough_and_smooth_surfaces() {
        assert_eq!(
            classify_surface("Ojamn och grov is pa norra delen."),
            Some(SurfaceCondition::Rough)
        );
        assert_eq!(classify_surface("Blank och fin is."), Some(SurfaceCondition::Smooth));
    }

    #[test]
    fn surface_absent_yields_none() {
        assert_eq!(classify_surface("Vattnet har stigit."), None);
    }
}
