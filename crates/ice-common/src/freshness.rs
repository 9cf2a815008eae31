//! Freshness tiers for user-submitted reports.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Reports older than this are shown as aging.
pub const AGING_AFTER_HOURS: i64 = 12;

/// Reports older than this are shown as stale.
pub const STALE_AFTER_HOURS: i64 = 18;

/// How trustworthy a user report still is, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Freshness {
    Fresh,
    Aging,
    Stale,
    Expired,
}

/// Evaluate freshness at a given instant.
///
/// Expiry wins regardless of age; below it the 18 h and 12 h thresholds
/// are strict (a report exactly 12 h old is still fresh). The thresholds
/// are fixed product decisions, not tunables.
pub fn freshness_at(
    now: DateTime<Utc>,
    reported_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
) -> Freshness {
    if now > expires_at {
        return Freshness::Expired;
    }
    let age = now - reported_at;
    if age > Duration::hours(STALE_AFTER_HOURS) {
        Freshness::Stale
    } else if age > Duration::hours(AGING_AFTER_HOURS) {
        Freshness::Aging
    } else {
        Freshness::Fresh
    }
}
