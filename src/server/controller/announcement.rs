use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        announcement::{
            AnnouncementDto, AnnouncementFormDto, AnnouncementListQuery, AnnouncementPageDto,
            CursorQuery,
        },
        api::{ErrorDto, ValidationErrorDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::announcement::AnnouncementService,
        state::AppState,
    },
};

pub static ANNOUNCEMENT_TAG: &str = "announcement";

/// One page of published announcements, newest first.
///
/// # Access Control
/// - `Public`
///
/// # Arguments
/// - `cursor` - `next_cursor` of the previous page; omit for the first page
#[utoipa::path(
    get,
    path = "/api/announcements",
    tag = ANNOUNCEMENT_TAG,
    params(CursorQuery),
    responses(
        (status = 200, description = "Up to 20 published announcements", body = AnnouncementPageDto),
        (status = 400, description = "Malformed cursor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_published_announcements(
    State(state): State<AppState>,
    Query(query): Query<CursorQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = AnnouncementService::new(&state.db)
        .published_page(query.cursor.as_deref())
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

/// Latest published announcements for the home page.
///
/// # Access Control
/// - `Public`
#[utoipa::path(
    get,
    path = "/api/announcements/latest",
    tag = ANNOUNCEMENT_TAG,
    responses(
        (status = 200, description = "Latest published announcements", body = Vec<AnnouncementDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_latest_announcements(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let announcements = AnnouncementService::new(&state.db)
        .latest_published()
        .await?;

    let dto: Vec<AnnouncementDto> = announcements.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Admin listing of every announcement, drafts included.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/announcements",
    tag = ANNOUNCEMENT_TAG,
    params(AnnouncementListQuery),
    responses(
        (status = 200, description = "Matching announcements", body = Vec<AnnouncementDto>),
        (status = 401, description = "Not signed in", body = ErrorDto)
    ),
)]
pub async fn get_announcements(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AnnouncementListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let announcements = AnnouncementService::new(&state.db)
        .list(query, state.local_now())
        .await?;

    let dto: Vec<AnnouncementDto> = announcements.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

#[utoipa::path(
    post,
    path = "/api/admin/announcements",
    tag = ANNOUNCEMENT_TAG,
    request_body = AnnouncementFormDto,
    responses(
        (status = 201, description = "Announcement created", body = AnnouncementDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 422, description = "Invalid form fields", body = ValidationErrorDto)
    ),
)]
pub async fn create_announcement(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AnnouncementFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let announcement = AnnouncementService::new(&state.db)
        .create(payload, &admin)
        .await?;

    Ok((StatusCode::CREATED, Json(announcement.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(("id" = i32, Path, description = "Announcement ID")),
    responses(
        (status = 200, description = "Announcement", body = AnnouncementDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto)
    ),
)]
pub async fn get_announcement(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let announcement = AnnouncementService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(announcement.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(("id" = i32, Path, description = "Announcement ID")),
    request_body = AnnouncementFormDto,
    responses(
        (status = 200, description = "Announcement updated", body = AnnouncementDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 422, description = "Invalid form fields", body = ValidationErrorDto)
    ),
)]
pub async fn update_announcement(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AnnouncementFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let announcement = AnnouncementService::new(&state.db)
        .update(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(announcement.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(("id" = i32, Path, description = "Announcement ID")),
    responses(
        (status = 204, description = "Announcement deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto)
    ),
)]
pub async fn delete_announcement(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AnnouncementService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
