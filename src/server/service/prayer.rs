//! Prayer-time source with a one hour in-memory cache.
//!
//! Today's schedule for the configured zone is fetched from the external prayer-time
//! API and kept for an hour. A failed fetch is logged and yields `None`; callers turn
//! that into a "data unavailable" state. A stale cache is never served after a
//! failed fetch.

use dioxus_logger::tracing;
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::RwLock;
use url::Url;

use crate::prayer::{PrayerSet, PrayerTimeError};

/// Time-to-live for a fetched schedule in seconds.
const PRAYER_CACHE_TTL_SECONDS: u64 = 60 * 60;

/// Status string the API returns on success.
const STATUS_OK: &str = "OK!";

#[derive(Clone)]
struct CachedPrayerSet {
    set: PrayerSet,
    expires_at: Instant,
}

impl CachedPrayerSet {
    fn new(set: PrayerSet) -> Self {
        Self {
            set,
            expires_at: Instant::now() + Duration::from_secs(PRAYER_CACHE_TTL_SECONDS),
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PrayerTimeResponse {
    status: String,
    #[serde(default)]
    prayer_time: Vec<PrayerSet>,
}

/// Why a fetch produced no schedule. Only ever logged.
#[derive(Error, Debug)]
enum PrayerFetchError {
    #[error("invalid prayer api url: {0}")]
    Url(#[from] url::ParseError),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("prayer api returned status '{0}'")]
    Status(String),
    #[error("prayer api returned no entries")]
    Empty,
    #[error(transparent)]
    InvalidTime(#[from] PrayerTimeError),
}

/// Fetches and caches today's prayer schedule for one zone.
#[derive(Clone)]
pub struct PrayerTimeSource {
    http_client: reqwest::Client,
    api_url: String,
    zone: String,
    cache: Arc<RwLock<Option<CachedPrayerSet>>>,
}

impl PrayerTimeSource {
    /// Creates a new PrayerTimeSource with an empty cache.
    ///
    /// # Arguments
    /// - `http_client` - Shared outbound HTTP client
    /// - `api_url` - Prayer-time endpoint; `period` and `zone` are appended
    /// - `zone` - Zone code such as `SGR01`
    pub fn new(http_client: reqwest::Client, api_url: String, zone: String) -> Self {
        Self {
            http_client,
            api_url,
            zone,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Returns today's schedule, from cache when it is less than an hour old.
    ///
    /// # Returns
    /// - `Some(PrayerSet)` - Today's schedule
    /// - `None` - The source is unreachable or returned a non-OK status
    pub async fn today(&self) -> Option<PrayerSet> {
        if let Some(cached) = self.cache.read().await.as_ref() {
            if !cached.is_expired() {
                return Some(cached.set.clone());
            }
        }

        self.refresh().await
    }

    /// Fetches the schedule now and replaces the cache on success.
    ///
    /// A failure clears the cache so an outdated schedule is not served later.
    pub async fn refresh(&self) -> Option<PrayerSet> {
        match self.fetch().await {
            Ok(set) => {
                *self.cache.write().await = Some(CachedPrayerSet::new(set.clone()));
                Some(set)
            }
            Err(e) => {
                tracing::error!("Failed to fetch prayer times for {}: {}", self.zone, e);
                *self.cache.write().await = None;
                None
            }
        }
    }

    fn request_url(&self) -> Result<Url, url::ParseError> {
        let mut url = Url::parse(&self.api_url)?;
        url.query_pairs_mut()
            .append_pair("period", "today")
            .append_pair("zone", &self.zone);
        Ok(url)
    }

    async fn fetch(&self) -> Result<PrayerSet, PrayerFetchError> {
        let response: PrayerTimeResponse = self
            .http_client
            .get(self.request_url()?)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        first_valid_set(response)
    }
}

/// Picks the first entry of an OK response and checks every time parses.
fn first_valid_set(response: PrayerTimeResponse) -> Result<PrayerSet, PrayerFetchError> {
    if response.status != STATUS_OK {
        return Err(PrayerFetchError::Status(response.status));
    }

    let set = response
        .prayer_time
        .into_iter()
        .next()
        .ok_or(PrayerFetchError::Empty)?;

    set.slots()?;

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prayer::test_support::sample_set;

    fn source(api_url: &str) -> PrayerTimeSource {
        PrayerTimeSource::new(
            reqwest::Client::new(),
            api_url.to_string(),
            "SGR01".to_string(),
        )
    }

    #[test]
    fn appends_period_and_zone() {
        let url = source("https://www.e-solat.gov.my/index.php?r=esolatApi/TakwimSolat")
            .request_url()
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://www.e-solat.gov.my/index.php?r=esolatApi/TakwimSolat&period=today&zone=SGR01"
        );
    }

    #[test]
    fn parses_ok_response_using_first_entry() {
        let json = r#"{
            "status": "OK!",
            "zone": "SGR01",
            "prayerTime": [{
                "hijri": "1446-12-05", "date": "01-Jun-2025", "day": "Sunday",
                "imsak": "05:50:00", "fajr": "06:00:00", "syuruk": "07:15:00",
                "dhuhr": "13:15:00", "asr": "16:30:00", "maghrib": "19:25:00",
                "isha": "20:40:00"
            }]
        }"#;
        let response: PrayerTimeResponse = serde_json::from_str(json).unwrap();

        let set = first_valid_set(response).unwrap();

        assert_eq!(set.fajr, "06:00:00");
        assert_eq!(set.date, "01-Jun-2025");
    }

    #[test]
    fn rejects_non_ok_status_and_empty_list() {
        let failed = PrayerTimeResponse {
            status: "NO_RECORD!".to_string(),
            prayer_time: vec![sample_set()],
        };
        assert!(matches!(
            first_valid_set(failed),
            Err(PrayerFetchError::Status(_))
        ));

        let empty = PrayerTimeResponse {
            status: STATUS_OK.to_string(),
            prayer_time: Vec::new(),
        };
        assert!(matches!(first_valid_set(empty), Err(PrayerFetchError::Empty)));
    }

    #[test]
    fn rejects_unparseable_times() {
        let mut set = sample_set();
        set.asr = "petang".to_string();
        let response = PrayerTimeResponse {
            status: STATUS_OK.to_string(),
            prayer_time: vec![set],
        };

        assert!(matches!(
            first_valid_set(response),
            Err(PrayerFetchError::InvalidTime(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_source_yields_none() {
        let source = source("http://127.0.0.1:9/prayer");

        assert!(source.today().await.is_none());
    }
}
