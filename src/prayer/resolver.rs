//! Next-prayer lookup and countdown text.

use chrono::{Duration, NaiveTime, Timelike};

use super::{PrayerSet, PrayerTimeError, PRAYER_NAMES};

/// The upcoming prayer relative to a given clock time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextPrayer {
    pub name: &'static str,
    pub time: NaiveTime,
    /// Set when every prayer today has started and the schedule wrapped to Imsak.
    pub tomorrow: bool,
}

impl NextPrayer {
    /// Display label, e.g. `Isyak` or `Imsak (Esok)`.
    pub fn label(&self) -> String {
        if self.tomorrow {
            format!("{} (Esok)", self.name)
        } else {
            self.name.to_string()
        }
    }
}

fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

/// Finds the first prayer whose minute strictly follows `now`'s minute.
///
/// Comparison is at minute granularity: a prayer stops being "next" at the minute it
/// starts. After Isyak the result wraps to Imsak with `tomorrow` set.
///
/// # Arguments
/// - `set` - Today's schedule
/// - `now` - Current local clock time
///
/// # Returns
/// - `Ok(NextPrayer)` - Upcoming prayer
/// - `Err(PrayerTimeError)` - A schedule time failed to parse
pub fn next_prayer(set: &PrayerSet, now: NaiveTime) -> Result<NextPrayer, PrayerTimeError> {
    let slots = set.slots()?;
    let current = minutes_since_midnight(now);

    let next = slots
        .iter()
        .find(|slot| minutes_since_midnight(slot.time) > current)
        .map(|slot| NextPrayer {
            name: slot.name,
            time: slot.time,
            tomorrow: false,
        })
        .unwrap_or(NextPrayer {
            name: PRAYER_NAMES[0],
            time: slots[0].time,
            tomorrow: true,
        });

    Ok(next)
}

/// Time from `now` until the next occurrence of `target`.
///
/// The occurrence is today when `target` is not earlier than `now`, otherwise tomorrow.
pub fn remaining_duration(target: NaiveTime, now: NaiveTime) -> Duration {
    let diff = target.signed_duration_since(now);
    if diff < Duration::zero() {
        diff + Duration::days(1)
    } else {
        diff
    }
}

/// Renders a duration with the largest two non-zero units, e.g. `2 jam 15 minit`.
///
/// Anything under a minute is seconds only. Negative durations render as `0 saat`.
pub fn format_remaining(duration: Duration) -> String {
    let total = duration.num_seconds().max(0);
    let units = [
        (total / 3600, "jam"),
        ((total % 3600) / 60, "minit"),
        (total % 60, "saat"),
    ];

    let parts: Vec<String> = units
        .iter()
        .filter(|(value, _)| *value > 0)
        .take(2)
        .map(|(value, unit)| format!("{} {}", value, unit))
        .collect();

    if parts.is_empty() {
        "0 saat".to_string()
    } else {
        parts.join(" ")
    }
}
