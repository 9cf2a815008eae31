//! Catalog tests that exercise a real PostgreSQL database.
//!
//! Ignored by default: point DATABASE_URL at a scratch database and run
//! `cargo test -p storage -- --ignored`. Each test registers its own
//! lake under a unique slug, so runs are independent and repeatable.

use chrono::{Duration, Utc};
use ice_common::{IceStatus, Lake, ReportSource, SurfaceCondition};
use storage::{Catalog, NewIceReport, NewLake};
use uuid::Uuid;

async fn test_catalog() -> Catalog {
    let url =
        std::env::var("DATABASE_URL").expect("DATABASE_URL must point at a test database");
    let catalog = Catalog::connect(&url).await.expect("connect");
    catalog.migrate().await.expect("migrate");
    catalog
}

async fn register_lake(catalog: &Catalog) -> Lake {
    let slug = format!("testsjon-{}", Uuid::new_v4());
    let lake = NewLake {
        name: "Testsjön".to_string(),
        slug: slug.clone(),
        region: None,
        geometry: None,
        centroid: None,
        area_km2: None,
        typical_freeze_date: None,
    };
    assert!(catalog.insert_lake(&lake).await.expect("insert lake"));
    catalog
        .lake_by_slug(&slug)
        .await
        .expect("fetch lake")
        .expect("lake just inserted")
}

#[tokio::test]
#[ignore]
async fn reconciling_the_same_lake_repeatedly_leaves_one_official_row() {
    let catalog = test_catalog().await;
    let lake = register_lake(&catalog).await;

    let first = NewIceReport {
        status: IceStatus::Uncertain,
        ice_thickness_cm: None,
        surface_condition: None,
        temperature_avg: None,
        wind_speed_avg: None,
        raw_text: Some("Testsjön: Matning pagar.".to_string()),
        valid_until: None,
    };
    let second = NewIceReport {
        status: IceStatus::Safe,
        ice_thickness_cm: Some(15),
        surface_condition: Some(SurfaceCondition::Plowed),
        temperature_avg: None,
        wind_speed_avg: None,
        raw_text: Some("Testsjön: Isen ar plogad och preparerad, 15 cm.".to_string()),
        valid_until: None,
    };

    catalog
        .replace_official_report(lake.id, &first)
        .await
        .expect("first replace");
    catalog
        .replace_official_report(lake.id, &second)
        .await
        .expect("second replace");
    catalog
        .replace_official_report(lake.id, &second)
        .await
        .expect("third replace");

    let reports = catalog.reports_for_lake(lake.id, 50).await.expect("history");
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].source, ReportSource::Official);
    assert_eq!(reports[0].status, IceStatus::Safe);
    assert_eq!(reports[0].ice_thickness_cm, Some(15));
}

#[tokio::test]
#[ignore]
async fn forecast_reports_append_while_officials_replace() {
    let catalog = test_catalog().await;
    let lake = register_lake(&catalog).await;

    let forecast = NewIceReport {
        status: IceStatus::Uncertain,
        ice_thickness_cm: None,
        surface_condition: None,
        temperature_avg: Some(-3.4),
        wind_speed_avg: Some(7.9),
        raw_text: None,
        valid_until: Some(Utc::now() + Duration::hours(6)),
    };
    let official = NewIceReport {
        status: IceStatus::NoIce,
        ice_thickness_cm: None,
        surface_condition: None,
        temperature_avg: None,
        wind_speed_avg: None,
        raw_text: Some("Testsjön: Ingen is annu.".to_string()),
        valid_until: None,
    };

    catalog
        .insert_forecast_report(lake.id, &forecast)
        .await
        .expect("first forecast");
    catalog
        .insert_forecast_report(lake.id, &forecast)
        .await
        .expect("second forecast");
    catalog
        .replace_official_report(lake.id, &official)
        .await
        .expect("first replace");
    catalog
        .replace_official_report(lake.id, &official)
        .await
        .expect("second replace");

    let reports = catalog.reports_for_lake(lake.id, 50).await.expect("history");
    assert_eq!(reports.len(), 3);
    assert_eq!(
        reports
            .iter()
            .filter(|r| r.source == ReportSource::Forecast)
            .count(),
        2
    );
    assert_eq!(
        reports
            .iter()
            .filter(|r| r.source == ReportSource::Official)
            .count(),
        1
    );
}
