//! Report records and the per-lake aggregate row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::freshness::{freshness_at, Freshness};
use crate::geo::{Point, Polygon};
use crate::status::{IceStatus, ReportSource, SurfaceCondition};

/// Lifetime of a user-submitted observation. Expiry is stamped at
/// creation time, never recomputed.
pub const USER_REPORT_TTL_HOURS: i64 = 24;

/// A scraped or forecast-derived ice report.
///
/// For `source = official` at most one row exists per lake at any time;
/// the reconciler replaces the previous row instead of mutating it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IceReport {
    pub id: Uuid,
    pub lake_id: Uuid,
    pub status: IceStatus,
    pub source: ReportSource,
    pub ice_thickness_cm: Option<i32>,
    pub surface_condition: Option<SurfaceCondition>,
    pub temperature_avg: Option<f64>,
    pub wind_speed_avg: Option<f64>,
    pub raw_text: Option<String>,
    pub scraped_at: DateTime<Utc>,
    pub valid_from: DateTime<Utc>,
    pub valid_until: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// A skater-submitted observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserReport {
    pub id: Uuid,
    pub lake_id: Uuid,
    pub user_id: Option<String>,
    pub status: Option<IceStatus>,
    pub surface_condition: Option<SurfaceCondition>,
    pub comment: Option<String>,
    pub location: Option<Point>,
    pub upvotes: i32,
    pub reported_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl UserReport {
    /// Freshness of this observation at `now`.
    pub fn freshness(&self, now: DateTime<Utc>) -> Freshness {
        freshness_at(now, self.reported_at, self.expires_at)
    }
}

/// One row of the per-lake aggregate view served to consumers.
///
/// `status` reflects the most recent still-valid official or forecast
/// report and degrades to `Uncertain` when none exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LakeStatus {
    pub lake_id: Uuid,
    pub name: String,
    pub slug: String,
    pub region: Option<String>,
    pub geometry: Option<Polygon>,
    pub centroid: Option<Point>,
    pub area_km2: Option<f64>,
    pub status: IceStatus,
    pub source: Option<ReportSource>,
    pub ice_thickness_cm: Option<i32>,
    pub surface_condition: Option<SurfaceCondition>,
    pub last_updated: Option<DateTime<Utc>>,
    pub recent_report_count: i64,
}
