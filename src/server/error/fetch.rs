use thiserror::Error;

/// Failure to obtain data from an external source.
#[derive(Error, Debug)]
pub enum ExternalFetchError {
    /// Prayer-time source unreachable or returned a non-OK status for the zone.
    #[error("Tidak dapat memuat waktu solat")]
    PrayerTimesUnavailable(String),
}
