//! Lake registry types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geo::{Point, Polygon};

/// A registered lake.
///
/// Lakes are seeded administratively and treated as immutable reference
/// data: the pipelines attach reports to them but never create or edit
/// lake rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lake {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub region: Option<String>,
    pub geometry: Option<Polygon>,
    pub centroid: Option<Point>,
    pub area_km2: Option<f64>,
    pub typical_freeze_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Build a URL-safe slug from a lake name.
///
/// Swedish å/ä/ö fold to a/o so "Mälaren - Ekerö" becomes
/// "malaren-ekero".
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_was_hyphen = true;
    for c in name.to_lowercase().chars() {
        let folded = match c {
            'å' | 'ä' => 'a',
            'ö' => 'o',
            'é' => 'e',
            other => other,
        };
        if folded.is_ascii_alphanumeric() {
            slug.push(folded);
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_folds_swedish_letters() {
        assert_eq!(slugify("Långsjön"), "langsjon");
        assert_eq!(slugify("Ältasjön"), "altasjon");
        assert_eq!(slugify("Örlången"), "orlangen");
    }

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("Mälaren - Ekerö"), "malaren-ekero");
        assert_eq!(slugify("Lilla Värtan"), "lilla-vartan");
    }

    #[test]
    fn slugify_ignores_leading_and_trailing_junk() {
        assert_eq!(slugify("  Flaten  "), "flaten");
        assert_eq!(slugify("Tyresö-Flaten"), "tyreso-flaten");
    }
}
