use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, prayer::PrayerTimesDto},
    server::{
        error::{fetch::ExternalFetchError, AppError},
        state::AppState,
    },
};

pub static PRAYER_TAG: &str = "prayer";

/// Today's prayer times for the configured zone.
///
/// Served from an hourly cache. The client resolves the next prayer and runs the
/// countdown itself.
///
/// # Access Control
/// - `Public`
///
/// # Returns
/// - `200 OK` - Today's prayer set
/// - `503 Service Unavailable` - Prayer-time source unreachable or not OK
#[utoipa::path(
    get,
    path = "/api/prayer-times",
    tag = PRAYER_TAG,
    responses(
        (status = 200, description = "Today's prayer times", body = PrayerTimesDto),
        (status = 503, description = "Prayer-time source unavailable", body = ErrorDto)
    ),
)]
pub async fn get_prayer_times(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let zone = state.prayer.zone().to_string();

    let Some(prayer) = state.prayer.today().await else {
        return Err(ExternalFetchError::PrayerTimesUnavailable(zone).into());
    };

    Ok((StatusCode::OK, Json(PrayerTimesDto { zone, prayer })))
}
