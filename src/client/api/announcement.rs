use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, send_request,
            serialize_json,
        },
        model::{
            error::ApiError,
            query::{announcements_url, with_query},
        },
    },
    model::announcement::{
        AnnouncementDto, AnnouncementFormDto, AnnouncementListQuery, AnnouncementPageDto,
    },
};

/// One page of published announcements, starting after `cursor`.
pub async fn get_published_announcements(
    cursor: Option<String>,
) -> Result<AnnouncementPageDto, ApiError> {
    let url = with_query("/api/announcements", &[("cursor", cursor)]);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_latest_announcements() -> Result<Vec<AnnouncementDto>, ApiError> {
    let response = send_request(get("/api/announcements/latest")).await?;
    parse_response(response).await
}

pub async fn get_announcements(
    query: &AnnouncementListQuery,
) -> Result<Vec<AnnouncementDto>, ApiError> {
    let url = announcements_url("/api/admin/announcements", query);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_announcement(id: i32) -> Result<AnnouncementDto, ApiError> {
    let url = format!("/api/admin/announcements/{}", id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_announcement(form: &AnnouncementFormDto) -> Result<AnnouncementDto, ApiError> {
    let body = serialize_json(form)?;
    let response = send_request(post("/api/admin/announcements").body(body)).await?;
    parse_response(response).await
}

pub async fn update_announcement(
    id: i32,
    form: &AnnouncementFormDto,
) -> Result<AnnouncementDto, ApiError> {
    let url = format!("/api/admin/announcements/{}", id);
    let body = serialize_json(form)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_announcement(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/admin/announcements/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
