//! Application state shared across all request handlers.
//!
//! `AppState` is built once during startup and cloned into every handler through
//! Axum's state extraction. Every field is cheap to clone.

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::{identity::IdentityProvider, prayer::PrayerTimeSource};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,

    /// Email and password sign-in backend.
    pub identity: Arc<dyn IdentityProvider>,

    /// Cached prayer-time fetcher, shared with the hourly refresh job.
    pub prayer: PrayerTimeSource,

    /// Local offset of the mosque, used for "today" and date buckets.
    pub utc_offset: FixedOffset,
}

impl AppState {
    /// Creates the application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `identity` - Identity provider used by the login endpoint
    /// - `prayer` - Prayer-time source with its cache
    /// - `utc_offset` - Mosque's local offset
    pub fn new(
        db: DatabaseConnection,
        identity: Arc<dyn IdentityProvider>,
        prayer: PrayerTimeSource,
        utc_offset: FixedOffset,
    ) -> Self {
        Self {
            db,
            identity,
            prayer,
            utc_offset,
        }
    }

    /// Current time in the mosque's local offset.
    pub fn local_now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.utc_offset)
    }
}
