//! Portal clock.
//!
//! Uses atomic primitives so the refresh ticker and the action handlers
//! read the same "now" without locking. The clock can be frozen at a fixed
//! instant for demos and screenshots.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use chrono::{DateTime, Utc};

/// Sentinel for "not frozen".
const LIVE: i64 = i64::MIN;

/// Frozen instant in milliseconds since the epoch, or `LIVE`.
static FROZEN_AT_MS: AtomicI64 = AtomicI64::new(LIVE);

/// Whether shutdown has been requested.
static SHUTDOWN_REQUESTED: AtomicBool = AtomicBool::new(false);

/// Returns the current portal time.
pub fn now() -> DateTime<Utc> {
    match FROZEN_AT_MS.load(Ordering::Relaxed) {
        LIVE => Utc::now(),
        ms => DateTime::from_timestamp_millis(ms).unwrap_or_else(Utc::now),
    }
}

/// Freezes the clock at `at`, or unfreezes it with `None`.
pub fn set_frozen(at: Option<DateTime<Utc>>) {
    let ms = at.map(|t| t.timestamp_millis()).unwrap_or(LIVE);
    FROZEN_AT_MS.store(ms, Ordering::Relaxed);
}

pub fn is_frozen() -> bool {
    FROZEN_AT_MS.load(Ordering::Relaxed) != LIVE
}

/// Requests shutdown.
pub fn request_shutdown() {
    SHUTDOWN_REQUESTED.store(true, Ordering::Relaxed);
}

/// Returns whether shutdown has been requested.
pub fn is_shutdown_requested() -> bool {
    SHUTDOWN_REQUESTED.load(Ordering::Relaxed)
}
