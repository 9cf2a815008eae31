//! Read-side session layer over the lake ice report store.
//!
//! # Architecture
//!
//! The viewer keeps an in-memory board of per-lake status rows and the
//! machinery that keeps it honest:
//!
//! - `board`: shared snapshot of current per-lake status
//! - `staleness`: freshness threshold and the refresh trigger seam
//! - `session`: per-consumer coordination (load, one-shot auto
//!   refresh, manual refresh, detail reads, user reports)
//! - `live`: event-bus subscription that merges updates into the board

pub mod board;
pub mod live;
pub mod session;
pub mod staleness;

// Re-exports
pub use board::{LakeBoard, WeakBoard};
pub use live::{spawn_live_updates, LiveHandle};
pub use session::{IceSession, LakeDetail, Notice, SessionRefresher};
pub use staleness::{
    is_stale, HttpRefresher, RefreshOutcome, RefreshTrigger, STALE_AFTER_MINUTES,
};
