//! Shared helper utilities for factory methods.

use chrono::{DateTime, Duration, Utc};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a 12 digit IC number in `123456-12-1234` form from a counter value.
///
/// # Arguments
/// - `id` - Counter value, the last four digits of the result
///
/// # Returns
/// - `String` - Formatted IC number
pub fn ic_number_for(id: u64) -> String {
    format!("900101-14-{:04}", id % 10_000)
}

/// Timestamp `seconds` seconds before now.
///
/// Factories use this to give rows distinct, ordered creation times without
/// sleeping between inserts.
pub fn seconds_ago(seconds: i64) -> DateTime<Utc> {
    Utc::now() - Duration::seconds(seconds)
}
