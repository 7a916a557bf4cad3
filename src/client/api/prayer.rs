use crate::{
    client::{
        api::helper::{get, parse_response, send_request},
        model::error::ApiError,
    },
    model::prayer::PrayerTimesDto,
};

pub async fn get_prayer_times() -> Result<PrayerTimesDto, ApiError> {
    let response = send_request(get("/api/prayer-times")).await?;
    parse_response(response).await
}
