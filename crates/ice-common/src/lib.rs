//! Common types and utilities shared across all icewatch services.

pub mod error;
pub mod freshness;
pub mod geo;
pub mod jobs;
pub mod lake;
pub mod report;
pub mod status;

pub use error::{IceError, IceResult};
pub use freshness::{freshness_at, Freshness};
pub use geo::{Point, Polygon};
pub use jobs::{ForecastSummary, ScrapeSummary};
pub use lake::{slugify, Lake};
pub use report::{IceReport, LakeStatus, UserReport, USER_REPORT_TTL_HOURS};
pub use status::{ForecastQuality, IceStatus, ReportSource, SurfaceCondition};
