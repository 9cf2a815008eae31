//! Administrative seed import for the Stockholm lake registry.
//!
//! The registry is reference data: the import inserts lakes that are
//! missing and never touches existing rows. Outlines are simplified;
//! centroids exist to anchor the weather forecasts.

use chrono::NaiveDate;
use tracing::info;

use ice_common::{slugify, IceResult, Point, Polygon};

use crate::catalog::{Catalog, NewLake};

struct SeedLake {
    name: &'static str,
    region: &'static str,
    centroid: (f64, f64),
    outline: &'static [[f64; 2]],
    area_km2: Option<f64>,
    freezes: Option<(i32, u32, u32)>,
}

const SEED_LAKES: &[SeedLake] = &[
    SeedLake {
        name: "Brunnsviken",
        region: "Stockholm",
        centroid: (18.055, 59.355),
        outline: &[
            [18.03, 59.36],
            [18.06, 59.37],
            [18.08, 59.36],
            [18.07, 59.34],
            [18.04, 59.34],
            [18.03, 59.36],
        ],
        area_km2: Some(2.1),
        freezes: Some((2025, 1, 20)),
    },
    SeedLake {
        name: "Trekanten",
        region: "Stockholm",
        centroid: (18.02, 59.31),
        outline: &[
            [18.01, 59.31],
            [18.02, 59.32],
            [18.03, 59.31],
            [18.02, 59.30],
            [18.01, 59.31],
        ],
        area_km2: Some(0.3),
        freezes: Some((2025, 1, 18)),
    },
    SeedLake {
        name: "Flaten",
        region: "Nacka",
        centroid: (18.21, 59.255),
        outline: &[
            [18.18, 59.26],
            [18.22, 59.27],
            [18.24, 59.26],
            [18.22, 59.24],
            [18.19, 59.24],
            [18.18, 59.26],
        ],
        area_km2: Some(1.8),
        freezes: Some((2025, 1, 12)),
    },
    SeedLake {
        name: "Mälaren - Ekerö",
        region: "Ekerö",
        centroid: (17.80, 59.295),
        outline: &[
            [17.75, 59.30],
            [17.80, 59.32],
            [17.85, 59.31],
            [17.83, 59.28],
            [17.78, 59.27],
            [17.75, 59.30],
        ],
        area_km2: Some(15.5),
        freezes: Some((2025, 1, 15)),
    },
    SeedLake {
        name: "Norrviken",
        region: "Sollentuna",
        centroid: (17.96, 59.43),
        outline: &[
            [17.92, 59.43],
            [17.96, 59.45],
            [18.00, 59.44],
            [17.98, 59.41],
            [17.93, 59.41],
            [17.92, 59.43],
        ],
        area_km2: Some(4.1),
        freezes: Some((2025, 1, 13)),
    },
    SeedLake {
        name: "Lilla Värtan",
        region: "Stockholm",
        centroid: (18.12, 59.365),
        outline: &[
            [18.08, 59.36],
            [18.12, 59.38],
            [18.16, 59.37],
            [18.14, 59.35],
            [18.10, 59.35],
            [18.08, 59.36],
        ],
        area_km2: Some(4.5),
        freezes: Some((2025, 2, 1)),
    },
    SeedLake {
        name: "Drevviken",
        region: "Haninge",
        centroid: (18.13, 59.20),
        outline: &[
            [18.08, 59.20],
            [18.14, 59.22],
            [18.18, 59.21],
            [18.15, 59.18],
            [18.10, 59.18],
            [18.08, 59.20],
        ],
        area_km2: Some(5.4),
        freezes: Some((2025, 1, 16)),
    },
    SeedLake {
        name: "Orlången",
        region: "Huddinge",
        centroid: (18.015, 59.22),
        outline: &[
            [17.98, 59.22],
            [18.02, 59.24],
            [18.05, 59.23],
            [18.03, 59.20],
            [17.99, 59.20],
            [17.98, 59.22],
        ],
        area_km2: Some(3.2),
        freezes: Some((2025, 1, 14)),
    },
    // Plowed-track lakes the authority page also covers. No outlines
    // digitized yet; centroids are enough for forecasts and matching.
    SeedLake {
        name: "Magelungen",
        region: "Farsta",
        centroid: (18.07, 59.22),
        outline: &[],
        area_km2: Some(2.4),
        freezes: None,
    },
    SeedLake {
        name: "Judarn",
        region: "Bromma",
        centroid: (17.96, 59.335),
        outline: &[],
        area_km2: Some(0.1),
        freezes: None,
    },
    SeedLake {
        name: "Kyrksjön",
        region: "Bromma",
        centroid: (17.935, 59.348),
        outline: &[],
        area_km2: Some(0.1),
        freezes: None,
    },
    SeedLake {
        name: "Ältasjön",
        region: "Nacka",
        centroid: (18.17, 59.26),
        outline: &[],
        area_km2: Some(0.8),
        freezes: None,
    },
    SeedLake {
        name: "Långsjön",
        region: "Älvsjö",
        centroid: (17.99, 59.28),
        outline: &[],
        area_km2: Some(0.3),
        freezes: None,
    },
    SeedLake {
        name: "Råstasjön",
        region: "Solna",
        centroid: (17.995, 59.37),
        outline: &[],
        area_km2: Some(0.2),
        freezes: None,
    },
    SeedLake {
        name: "Bornsjön",
        region: "Salem",
        centroid: (17.70, 59.22),
        outline: &[],
        area_km2: Some(6.8),
        freezes: None,
    },
    SeedLake {
        name: "Tyresö-Flaten",
        region: "Tyresö",
        centroid: (18.28, 59.23),
        outline: &[],
        area_km2: Some(0.8),
        freezes: None,
    },
];

/// Insert any missing lakes from the reference set. Returns how many
/// were newly registered.
pub async fn seed_lakes(catalog: &Catalog) -> IceResult<usize> {
    let mut inserted = 0;

    for seed in SEED_LAKES {
        let lake = NewLake {
            name: seed.name.to_string(),
            slug: slugify(seed.name),
            region: Some(seed.region.to_string()),
            geometry: if seed.outline.is_empty() {
                None
            } else {
                Some(Polygon::new(seed.outline.to_vec()))
            },
            centroid: Some(Point::new(seed.centroid.0, seed.centroid.1)),
            area_km2: seed.area_km2,
            typical_freeze_date: seed
                .freezes
                .and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        };

        if catalog.insert_lake(&lake).await? {
            inserted += 1;
            info!(lake = seed.name, slug = %lake.slug, "Registered lake");
        }
    }

    Ok(inserted)
}
