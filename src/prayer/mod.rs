//! Daily prayer schedule and next-prayer resolution.
//!
//! Shared by the server (which fetches and caches the day's schedule) and the web
//! client (which drives the live countdown). Times are local clock times without a
//! date or timezone; callers supply "now" already converted to the mosque's local time.

pub mod resolver;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use resolver::{format_remaining, next_prayer, remaining_duration, NextPrayer};

/// Canonical display names, in schedule order.
pub const PRAYER_NAMES: [&str; 7] = [
    "Imsak", "Subuh", "Syuruk", "Zohor", "Asar", "Maghrib", "Isyak",
];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrayerTimeError {
    /// A time field did not parse as `HH:MM` or `HH:MM:SS`.
    #[error("Invalid time '{value}' for {name}")]
    InvalidTime { name: &'static str, value: String },
}

/// One day's prayer times.
///
/// Field names follow the upstream prayer-time source. Times are `HH:MM` strings
/// (`HH:MM:SS` is accepted too since the source includes seconds).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PrayerSet {
    pub hijri: String,
    pub date: String,
    pub day: String,
    pub imsak: String,
    pub fajr: String,
    pub syuruk: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
}

/// A single named prayer with its parsed clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrayerSlot {
    pub name: &'static str,
    pub time: NaiveTime,
}

impl PrayerSet {
    /// Raw `(name, time)` pairs in canonical order.
    pub fn entries(&self) -> [(&'static str, &str); 7] {
        [
            (PRAYER_NAMES[0], self.imsak.as_str()),
            (PRAYER_NAMES[1], self.fajr.as_str()),
            (PRAYER_NAMES[2], self.syuruk.as_str()),
            (PRAYER_NAMES[3], self.dhuhr.as_str()),
            (PRAYER_NAMES[4], self.asr.as_str()),
            (PRAYER_NAMES[5], self.maghrib.as_str()),
            (PRAYER_NAMES[6], self.isha.as_str()),
        ]
    }

    /// Parses all seven times.
    ///
    /// # Returns
    /// - `Ok([PrayerSlot; 7])` - Slots in canonical order
    /// - `Err(PrayerTimeError::InvalidTime)` - First time that failed to parse
    pub fn slots(&self) -> Result<[PrayerSlot; 7], PrayerTimeError> {
        let entries = self.entries();
        let mut slots = [PrayerSlot {
            name: PRAYER_NAMES[0],
            time: NaiveTime::MIN,
        }; 7];

        for (slot, (name, value)) in slots.iter_mut().zip(entries) {
            *slot = PrayerSlot {
                name,
                time: parse_clock_time(name, value)?,
            };
        }

        Ok(slots)
    }
}

/// Parses `HH:MM` or `HH:MM:SS` (24 hour).
pub fn parse_clock_time(name: &'static str, value: &str) -> Result<NaiveTime, PrayerTimeError> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M"))
        .map_err(|_| PrayerTimeError::InvalidTime {
            name,
            value: value.to_string(),
        })
}

/// Trims a source time to `HH:MM` for display.
pub fn display_time(value: &str) -> &str {
    value.get(..5).unwrap_or(value)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::PrayerSet;

    /// Schedule used across resolver tests.
    pub fn sample_set() -> PrayerSet {
        PrayerSet {
            hijri: "1447-04-27".to_string(),
            date: "19-Oct-2025".to_string(),
            day: "Sunday".to_string(),
            imsak: "05:50".to_string(),
            fajr: "06:00".to_string(),
            syuruk: "07:15".to_string(),
            dhuhr: "13:15".to_string(),
            asr: "16:30".to_string(),
            maghrib: "19:25".to_string(),
            isha: "20:40".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_times_with_and_without_seconds() {
        assert_eq!(
            parse_clock_time("Subuh", "06:00").unwrap(),
            NaiveTime::from_hms_opt(6, 0, 0).unwrap()
        );
        assert_eq!(
            parse_clock_time("Subuh", "06:00:00").unwrap(),
            NaiveTime::from_hms_opt(6, 0, 0).unwrap()
        );
    }

    #[test]
    fn rejects_malformed_time() {
        let mut set = test_support::sample_set();
        set.asr = "4.30pm".to_string();

        let err = set.slots().unwrap_err();

        assert_eq!(
            err,
            PrayerTimeError::InvalidTime {
                name: "Asar",
                value: "4.30pm".to_string()
            }
        );
    }

    #[test]
    fn slots_follow_canonical_order() {
        let slots = test_support::sample_set().slots().unwrap();
        let names: Vec<_> = slots.iter().map(|s| s.name).collect();

        assert_eq!(names, PRAYER_NAMES.to_vec());
    }

    #[test]
    fn display_time_drops_seconds() {
        assert_eq!(display_time("13:15:00"), "13:15");
        assert_eq!(display_time("13:15"), "13:15");
    }
}
