//! Lake and report catalog using PostgreSQL.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};
use tracing::warn;
use uuid::Uuid;

use ice_common::{
    IceError, IceReport, IceResult, IceStatus, Lake, LakeStatus, Point, Polygon, ReportSource,
    SurfaceCondition, UserReport, USER_REPORT_TTL_HOURS,
};

use crate::events::{EventBus, ReportEvent, ReportStream};

/// Database connection pool and catalog operations.
pub struct Catalog {
    pool: PgPool,
    events: Option<Arc<dyn EventBus>>,
}

impl Catalog {
    /// Create a new catalog connection from database URL.
    pub async fn connect(database_url: &str) -> IceResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(|e| IceError::DatabaseError(format!("Connection failed: {}", e)))?;

        Ok(Self { pool, events: None })
    }

    /// Attach an event bus; report writes publish change events on it.
    pub fn with_event_bus(mut self, events: Arc<dyn EventBus>) -> Self {
        self.events = Some(events);
        self
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> IceResult<()> {
        // Split SQL statements and execute them individually
        for statement in SCHEMA_SQL.split(';') {
            let trimmed = statement.trim();
            if !trimmed.is_empty() {
                sqlx::query(trimmed)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| IceError::DatabaseError(format!("Migration failed: {}", e)))?;
            }
        }

        Ok(())
    }

    /// Register a lake. Returns false when the slug is already present;
    /// existing rows are never updated.
    pub async fn insert_lake(&self, lake: &NewLake) -> IceResult<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO lakes (
                id, name, slug, region, geometry, centroid,
                area_km2, typical_freeze_date, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (slug) DO NOTHING
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&lake.name)
        .bind(&lake.slug)
        .bind(&lake.region)
        .bind(lake.geometry.as_ref().map(Json))
        .bind(lake.centroid.as_ref().map(Json))
        .bind(lake.area_km2)
        .bind(lake.typical_freeze_date)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| IceError::DatabaseError(format!("Insert failed: {}", e)))?;

        Ok(result.rows_affected() == 1)
    }

    /// List all registered lakes, alphabetically.
    pub async fn list_lakes(&self) -> IceResult<Vec<Lake>> {
        let rows = sqlx::query_as::<_, LakeRow>(
            "SELECT id, name, slug, region, geometry, centroid, \
             area_km2, typical_freeze_date, created_at \
             FROM lakes ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| IceError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    /// Look up a single lake by slug.
    pub async fn lake_by_slug(&self, slug: &str) -> IceResult<Option<Lake>> {
        let row = sqlx::query_as::<_, LakeRow>(
            "SELECT id, name, slug, region, geometry, centroid, \
             area_km2, typical_freeze_date, created_at \
             FROM lakes WHERE slug = $1",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| IceError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(row.map(|r| r.into()))
    }

    /// Replace the official report for a lake.
    ///
    /// Runs as one transaction so readers never observe zero or two
    /// official rows; a partial unique index backstops the invariant
    /// against writers that bypass this method.
    pub async fn replace_official_report(
        &self,
        lake_id: Uuid,
        report: &NewIceReport,
    ) -> IceResult<Uuid> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| IceError::DatabaseError(format!("Transaction failed: {}", e)))?;

        sqlx::query("DELETE FROM ice_reports WHERE lake_id = $1 AND source = 'official'")
            .bind(lake_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| IceError::DatabaseError(format!("Delete failed: {}", e)))?;

        insert_report_stmt(id, lake_id, ReportSource::Official, report, now)
            .execute(&mut *tx)
            .await
            .map_err(|e| IceError::DatabaseError(format!("Insert failed: {}", e)))?;

        tx.commit()
            .await
            .map_err(|e| IceError::DatabaseError(format!("Commit failed: {}", e)))?;

        self.notify(ReportStream::Ice, lake_id).await;
        Ok(id)
    }

    /// Append a forecast-derived report. Older forecast rows are left in
    /// place and age out via `valid_until`.
    pub async fn insert_forecast_report(
        &self,
        lake_id: Uuid,
        report: &NewIceReport,
    ) -> IceResult<Uuid> {
        let id = Uuid::new_v4();

        insert_report_stmt(id, lake_id, ReportSource::Forecast, report, Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| IceError::DatabaseError(format!("Insert failed: {}", e)))?;

        self.notify(ReportStream::Ice, lake_id).await;
        Ok(id)
    }

    /// Report history for a lake, newest first.
    pub async fn reports_for_lake(&self, lake_id: Uuid, limit: i64) -> IceResult<Vec<IceReport>> {
        let rows = sqlx::query_as::<_, IceReportRow>(
            "SELECT id, lake_id, status, source, ice_thickness_cm, surface_condition, \
             temperature_avg, wind_speed_avg, raw_text, scraped_at, valid_from, valid_until, \
             created_at FROM ice_reports \
             WHERE lake_id = $1 ORDER BY scraped_at DESC LIMIT $2",
        )
        .bind(lake_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| IceError::DatabaseError(format!("Query failed: {}", e)))?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }

    /// Timestamp of the most recent report of any source, if one exists.
    /// This is the "last refresh" instant staleness checks run against.
    pub async fn latest_report_time(&self) -> IceResult<Option<DateTime<Utc>>> {
        let latest = sqlx::query_scalar::<_, Option<DateTime<Utc>>>(
            "SELECT MAX(scraped_at) FROM ice_reports",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| IceError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(latest)
    }

    /// Read the whole aggregate view, alphabetically by lake name.
    pub async fn current_status(&self) -> IceResult<Vec<LakeStatus>> {
        let rows = sqlx::query_as::<_, LakeStatusRow>(
            "SELECT lake_id, name, slug, region, geometry, centroid, area_km2, \
             status, source, ice_thickness_cm, surface_condition, last_updated, \
             recent_report_count FROM lake_current_status ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| IceError::DatabaseError(format!("Query failed: {}", e)))?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }

    /// Read one lake's aggregate row.
    pub async fn current_status_for_lake(&self, lake_id: Uuid) -> IceResult<Option<LakeStatus>> {
        let row = sqlx::query_as::<_, LakeStatusRow>(
            "SELECT lake_id, name, slug, region, geometry, centroid, area_km2, \
             status, source, ice_thickness_cm, surface_condition, last_updated, \
             recent_report_count FROM lake_current_status WHERE lake_id = $1",
        )
        .bind(lake_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| IceError::DatabaseError(format!("Query failed: {}", e)))?;

        row.map(|r| r.try_into()).transpose()
    }

    /// Store a skater observation. Expiry is stamped here, 24 h after
    /// the report time, and never recomputed later.
    pub async fn insert_user_report(&self, report: &NewUserReport) -> IceResult<UserReport> {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let expires_at = now + Duration::hours(USER_REPORT_TTL_HOURS);

        let row = sqlx::query_as::<_, UserReportRow>(
            r#"
            INSERT INTO user_reports (
                id, lake_id, user_id, status, surface_condition, comment,
                location, upvotes, reported_at, expires_at, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, 0, $8, $9, $10)
            RETURNING id, lake_id, user_id, status, surface_condition, comment,
                      location, upvotes, reported_at, expires_at, created_at
            "#,
        )
        .bind(id)
        .bind(report.lake_id)
        .bind(&report.user_id)
        .bind(report.status.map(|s| s.as_str()))
        .bind(report.surface_condition.map(|s| s.as_str()))
        .bind(&report.comment)
        .bind(report.location.as_ref().map(Json))
        .bind(now)
        .bind(expires_at)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| IceError::DatabaseError(format!("Insert failed: {}", e)))?;

        self.notify(ReportStream::User, report.lake_id).await;
        row.try_into()
    }

    /// Bump the upvote count on a user report. Returns the new count, or
    /// None when the report id is unknown.
    pub async fn upvote_user_report(&self, report_id: Uuid) -> IceResult<Option<i32>> {
        let row = sqlx::query_as::<_, (Uuid, i32)>(
            "UPDATE user_reports SET upvotes = upvotes + 1 \
             WHERE id = $1 RETURNING lake_id, upvotes",
        )
        .bind(report_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| IceError::DatabaseError(format!("Update failed: {}", e)))?;

        match row {
            Some((lake_id, upvotes)) => {
                self.notify(ReportStream::User, lake_id).await;
                Ok(Some(upvotes))
            }
            None => Ok(None),
        }
    }

    /// User reports for a lake, newest first, within the last 30 days.
    /// Expired reports are included by default so recent history stays
    /// visible; pass false to keep only live ones.
    pub async fn user_reports_for_lake(
        &self,
        lake_id: Uuid,
        include_expired: bool,
    ) -> IceResult<Vec<UserReport>> {
        let window_start = Utc::now() - Duration::days(30);

        let sql = if include_expired {
            "SELECT id, lake_id, user_id, status, surface_condition, comment, \
             location, upvotes, reported_at, expires_at, created_at \
             FROM user_reports WHERE lake_id = $1 AND reported_at > $2 \
             ORDER BY reported_at DESC"
        } else {
            "SELECT id, lake_id, user_id, status, surface_condition, comment, \
             location, upvotes, reported_at, expires_at, created_at \
             FROM user_reports WHERE lake_id = $1 AND reported_at > $2 \
             AND expires_at > NOW() ORDER BY reported_at DESC"
        };

        let rows = sqlx::query_as::<_, UserReportRow>(sql)
            .bind(lake_id)
            .bind(window_start)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| IceError::DatabaseError(format!("Query failed: {}", e)))?;

        rows.into_iter().map(|r| r.try_into()).collect()
    }

    /// Record a batch job run for the status endpoint.
    pub async fn record_job_run(
        &self,
        source: &str,
        status: &str,
        lakes_updated: i32,
        duration_ms: i64,
        detail: Option<serde_json::Value>,
    ) -> IceResult<()> {
        sqlx::query(
            "INSERT INTO job_log (id, source, status, lakes_updated, duration_ms, detail, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(Uuid::new_v4())
        .bind(source)
        .bind(status)
        .bind(lakes_updated)
        .bind(duration_ms)
        .bind(detail)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|e| IceError::DatabaseError(format!("Insert failed: {}", e)))?;

        Ok(())
    }

    /// Most recent job runs, newest first.
    pub async fn recent_job_runs(&self, limit: i64) -> IceResult<Vec<JobRun>> {
        let rows = sqlx::query_as::<_, JobRun>(
            "SELECT id, source, status, lakes_updated, duration_ms, created_at \
             FROM job_log ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| IceError::DatabaseError(format!("Query failed: {}", e)))?;

        Ok(rows)
    }

    // Event publishing never fails a write; a missed notification only
    // delays consumers until their next full fetch.
    async fn notify(&self, stream: ReportStream, lake_id: Uuid) {
        if let Some(events) = &self.events {
            if let Err(e) = events.publish(ReportEvent { stream, lake_id }).await {
                warn!(lake_id = %lake_id, error = %e, "Failed to publish report event");
            }
        }
    }
}

fn insert_report_stmt(
    id: Uuid,
    lake_id: Uuid,
    source: ReportSource,
    report: &NewIceReport,
    now: DateTime<Utc>,
) -> sqlx::query::Query<'_, sqlx::Postgres, sqlx::postgres::PgArguments> {
    sqlx::query(
        r#"
        INSERT INTO ice_reports (
            id, lake_id, status, source, ice_thickness_cm, surface_condition,
            temperature_avg, wind_speed_avg, raw_text,
            scraped_at, valid_from, valid_until, created_at
        ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        "#,
    )
    .bind(id)
    .bind(lake_id)
    .bind(report.status.as_str())
    .bind(source.as_str())
    .bind(report.ice_thickness_cm)
    .bind(report.surface_condition.map(|s| s.as_str()))
    .bind(report.temperature_avg)
    .bind(report.wind_speed_avg)
    .bind(report.raw_text.as_deref())
    .bind(now)
    .bind(now)
    .bind(report.valid_until)
    .bind(now)
}

/// Parameters for registering a lake.
#[derive(Debug, Clone)]
pub struct NewLake {
    pub name: String,
    pub slug: String,
    pub region: Option<String>,
    pub geometry: Option<Polygon>,
    pub centroid: Option<Point>,
    pub area_km2: Option<f64>,
    pub typical_freeze_date: Option<NaiveDate>,
}

/// Parameters for writing an ice report. `scraped_at` and `valid_from`
/// are stamped at write time.
#[derive(Debug, Clone)]
pub struct NewIceReport {
    pub status: IceStatus,
    pub ice_thickness_cm: Option<i32>,
    pub surface_condition: Option<SurfaceCondition>,
    pub temperature_avg: Option<f64>,
    pub wind_speed_avg: Option<f64>,
    pub raw_text: Option<String>,
    pub valid_until: Option<DateTime<Utc>>,
}

/// Parameters for a skater observation.
#[derive(Debug, Clone)]
pub struct NewUserReport {
    pub lake_id: Uuid,
    pub user_id: Option<String>,
    pub status: Option<IceStatus>,
    pub surface_condition: Option<SurfaceCondition>,
    pub comment: Option<String>,
    pub location: Option<Point>,
}

/// One row of the job log.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct JobRun {
    pub id: Uuid,
    pub source: String,
    pub status: String,
    pub lakes_updated: i32,
    pub duration_ms: i64,
    pub created_at: DateTime<Utc>,
}

/// Internal row type for database queries.
#[derive(FromRow)]
struct LakeRow {
    id: Uuid,
    name: String,
    slug: String,
    region: Option<String>,
    geometry: Option<Json<Polygon>>,
    centroid: Option<Json<Point>>,
    area_km2: Option<f64>,
    typical_freeze_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
}

impl From<LakeRow> for Lake {
    fn from(row: LakeRow) -> Self {
        Lake {
            id: row.id,
            name: row.name,
            slug: row.slug,
            region: row.region,
            geometry: row.geometry.map(|j| j.0),
            centroid: row.centroid.map(|j| j.0),
            area_km2: row.area_km2,
            typical_freeze_date: row.typical_freeze_date,
            created_at: row.created_at,
        }
    }
}

#[derive(FromRow)]
struct IceReportRow {
    id: Uuid,
    lake_id: Uuid,
    status: String,
    source: String,
    ice_thickness_cm: Option<i32>,
    surface_condition: Option<String>,
    temperature_avg: Option<f64>,
    wind_speed_avg: Option<f64>,
    raw_text: Option<String>,
    scraped_at: DateTime<Utc>,
    valid_from: DateTime<Utc>,
    valid_until: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<IceReportRow> for IceReport {
    type Error = IceError;

    fn try_from(row: IceReportRow) -> IceResult<Self> {
        Ok(IceReport {
            id: row.id,
            lake_id: row.lake_id,
            status: row.status.parse()?,
            source: row.source.parse()?,
            ice_thickness_cm: row.ice_thickness_cm,
            surface_condition: row.surface_condition.map(|s| s.parse()).transpose()?,
            temperature_avg: row.temperature_avg,
            wind_speed_avg: row.wind_speed_avg,
            raw_text: row.raw_text,
            scraped_at: row.scraped_at,
            valid_from: row.valid_from,
            valid_until: row.valid_until,
            created_at: row.created_at,
        })
    }
}

#[derive(FromRow)]
struct UserReportRow {
    id: Uuid,
    lake_id: Uuid,
    user_id: Option<String>,
    status: Option<String>,
    surface_condition: Option<String>,
    comment: Option<String>,
    location: Option<Json<Point>>,
    upvotes: i32,
    reported_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserReportRow> for UserReport {
    type Error = IceError;

    fn try_from(row: UserReportRow) -> IceResult<Self> {
        Ok(UserReport {
            id: row.id,
            lake_id: row.lake_id,
            user_id: row.user_id,
            status: row.status.map(|s| s.parse()).transpose()?,
            surface_condition: row.surface_condition.map(|s| s.parse()).transpose()?,
            comment: row.comment,
            location: row.location.map(|j| j.0),
            upvotes: row.upvotes,
            reported_at: row.reported_at,
            expires_at: row.expires_at,
            created_at: row.created_at,
        })
    }
}

#[derive(FromRow)]
struct LakeStatusRow {
    lake_id: Uuid,
    name: String,
    slug: String,
    region: Option<String>,
    geometry: Option<Json<Polygon>>,
    centroid: Option<Json<Point>>,
    area_km2: Option<f64>,
    status: String,
    source: Option<String>,
    ice_thickness_cm: Option<i32>,
    surface_condition: Option<String>,
    last_updated: Option<DateTime<Utc>>,
    recent_report_count: i64,
}

impl TryFrom<LakeStatusRow> for LakeStatus {
    type Error = IceError;

    fn try_from(row: LakeStatusRow) -> IceResult<Self> {
        Ok(LakeStatus {
            lake_id: row.lake_id,
            name: row.name,
            slug: row.slug,
            region: row.region,
            geometry: row.geometry.map(|j| j.0),
            centroid: row.centroid.map(|j| j.0),
            area_km2: row.area_km2,
            status: row.status.parse()?,
            source: row.source.map(|s| s.parse()).transpose()?,
            ice_thickness_cm: row.ice_thickness_cm,
            surface_condition: row.surface_condition.map(|s| s.parse()).transpose()?,
            last_updated: row.last_updated,
            recent_report_count: row.recent_report_count,
        })
    }
}

/// Database schema SQL.
///
/// The `lake_current_status` view recomputes the aggregate per read:
/// the newest still-valid official or forecast report per lake, plus
/// the live user-report count. A lake with no usable report shows as
/// 'uncertain'.
const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS lakes (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE,
    region TEXT,
    geometry JSONB,
    centroid JSONB,
    area_km2 DOUBLE PRECISION,
    typical_freeze_date DATE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE TABLE IF NOT EXISTS ice_reports (
    id UUID PRIMARY KEY,
    lake_id UUID NOT NULL REFERENCES lakes(id) ON DELETE CASCADE,
    status VARCHAR(20) NOT NULL,
    source VARCHAR(20) NOT NULL,
    ice_thickness_cm INTEGER,
    surface_condition VARCHAR(20),
    temperature_avg DOUBLE PRECISION,
    wind_speed_avg DOUBLE PRECISION,
    raw_text TEXT,
    scraped_at TIMESTAMPTZ NOT NULL,
    valid_from TIMESTAMPTZ NOT NULL,
    valid_until TIMESTAMPTZ,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_ice_reports_lake ON ice_reports(lake_id, scraped_at DESC);

CREATE UNIQUE INDEX IF NOT EXISTS idx_ice_reports_one_official
    ON ice_reports(lake_id) WHERE source = 'official';

CREATE TABLE IF NOT EXISTS user_reports (
    id UUID PRIMARY KEY,
    lake_id UUID NOT NULL REFERENCES lakes(id) ON DELETE CASCADE,
    user_id TEXT,
    status VARCHAR(20),
    surface_condition VARCHAR(20),
    comment TEXT,
    location JSONB,
    upvotes INTEGER NOT NULL DEFAULT 0,
    reported_at TIMESTAMPTZ NOT NULL,
    expires_at TIMESTAMPTZ NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_user_reports_lake ON user_reports(lake_id, reported_at DESC);

CREATE TABLE IF NOT EXISTS job_log (
    id UUID PRIMARY KEY,
    source VARCHAR(20) NOT NULL,
    status VARCHAR(20) NOT NULL,
    lakes_updated INTEGER NOT NULL DEFAULT 0,
    duration_ms BIGINT NOT NULL DEFAULT 0,
    detail JSONB,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX IF NOT EXISTS idx_job_log_created ON job_log(created_at DESC);

CREATE OR REPLACE VIEW lake_current_status AS
SELECT
    l.id AS lake_id,
    l.name,
    l.slug,
    l.region,
    l.geometry,
    l.centroid,
    l.area_km2,
    COALESCE(r.status, 'uncertain') AS status,
    r.source,
    r.ice_thickness_cm,
    r.surface_condition,
    r.scraped_at AS last_updated,
    COALESCE(u.cnt, 0) AS recent_report_count
FROM lakes l
LEFT JOIN LATERAL (
    SELECT status, source, ice_thickness_cm, surface_condition, scraped_at
    FROM ice_reports
    WHERE lake_id = l.id
      AND source IN ('official', 'forecast')
      AND (valid_until IS NULL OR valid_until > NOW())
    ORDER BY scraped_at DESC
    LIMIT 1
) r ON TRUE
LEFT JOIN LATERAL (
    SELECT COUNT(*) AS cnt
    FROM user_reports
    WHERE lake_id = l.id AND expires_at > NOW()
) u ON TRUE
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_keeps_one_official_report_per_lake() {
        assert!(SCHEMA_SQL.contains("CREATE UNIQUE INDEX IF NOT EXISTS idx_ice_reports_one_official"));
        assert!(SCHEMA_SQL.contains("ON ice_reports(lake_id) WHERE source = 'official'"));
    }

    #[test]
    fn schema_splits_into_runnable_statements() {
        let statements: Vec<&str> = SCHEMA_SQL
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        assert_eq!(statements.len(), 9);
        assert!(statements.iter().all(|s| s.starts_with("CREATE")));
    }
}
