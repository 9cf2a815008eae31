//! Lake ice ingestion library.
//!
//! Provides the two batch jobs that feed the report store.
//!
//! # Architecture
//!
//! This crate is used by the `ingester` service, which runs the jobs on
//! a schedule and on demand via its HTTP trigger endpoints. It handles:
//!
//! - Status page scraping: fetch the authority page, reduce it to plain
//!   text, carve out each lake's segment, and classify it
//! - Lake name resolution against the registry, tolerating the feed's
//!   diacritic loss
//! - Reconciliation into the single official report held per lake
//! - Weather forecasts: a 7-day hourly series per lake centroid, a
//!   threshold heuristic, and a time-bounded forecast report
//!
//! Both jobs isolate failures per lake and always return a summary
//! envelope instead of raising past the job boundary.

pub mod error;
pub mod forecast;
pub mod scrape;
mod classify;
mod extract;
mod normalize;
mod parse;
mod resolve;

// Re-exports
pub use classify::{classify_status, classify_surface};
pub use error::{IngestionError, Result};
pub use extract::{extract_last_updated, extract_status_message, extract_thickness};
pub use forecast::{run_forecast, WeatherClient};
pub use normalize::{collapse_whitespace, normalize_page};
pub use parse::{parse_page, ParsedReport, GENERIC_NO_ICE_MESSAGE};
pub use resolve::resolve_lake;
pub use scrape::{run_scrape, StatusPageClient};
