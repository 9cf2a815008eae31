//! Storage abstractions for icewatch services.
//!
//! Provides:
//! - PostgreSQL catalog for lakes, ice reports and user reports
//! - Report change events over Redis pub/sub (or in-process for tests)
//! - The administrative seed import for the Stockholm lake registry

pub mod catalog;
pub mod events;
pub mod seed;

pub use catalog::{Catalog, JobRun, NewIceReport, NewLake, NewUserReport};
pub use events::{EventBus, EventStream, MemoryEventBus, RedisEventBus, ReportEvent, ReportStream};
pub use seed::seed_lakes;
