use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        member::{MemberDto, MemberFormDto, MemberListQuery},
    },
    server::{
        controller::param::LookupParam,
        error::AppError,
        listing::export::CsvExport,
        middleware::auth::{AuthGuard, Permission},
        service::member::MemberService,
        state::AppState,
    },
};

pub static MEMBER_TAG: &str = "member";

/// Lists members matching the search and filters, newest first.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `query` - Free-text search over name, IC, phone and email; status and gender
#[utoipa::path(
    get,
    path = "/api/admin/members",
    tag = MEMBER_TAG,
    params(MemberListQuery),
    responses(
        (status = 200, description = "Matching members", body = Vec<MemberDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MemberListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let members = MemberService::new(&state.db)
        .list(query, state.local_now())
        .await?;

    let dto: Vec<MemberDto> = members.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Looks up members by name for the donation form's donor picker.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/members/lookup",
    tag = MEMBER_TAG,
    params(LookupParam),
    responses(
        (status = 200, description = "Members whose name contains the term", body = Vec<MemberDto>),
        (status = 401, description = "Not signed in", body = ErrorDto)
    ),
)]
pub async fn lookup_members(
    State(state): State<AppState>,
    session: Session,
    Query(param): Query<LookupParam>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let members = MemberService::new(&state.db).lookup(&param.q).await?;

    let dto: Vec<MemberDto> = members.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(dto)))
}

/// Downloads the filtered member list as CSV.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - `ahli-masjid-yyyy-MM-dd.csv` attachment
#[utoipa::path(
    get,
    path = "/api/admin/members/export",
    tag = MEMBER_TAG,
    params(MemberListQuery),
    responses(
        (status = 200, description = "CSV file", content_type = "text/csv"),
        (status = 401, description = "Not signed in", body = ErrorDto)
    ),
)]
pub async fn export_members(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<MemberListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let export = MemberService::new(&state.db)
        .export(query, state.local_now())
        .await?;

    Ok(csv_response(export))
}

#[utoipa::path(
    post,
    path = "/api/admin/members",
    tag = MEMBER_TAG,
    request_body = MemberFormDto,
    responses(
        (status = 201, description = "Member created", body = MemberDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 422, description = "Invalid form fields", body = ValidationErrorDto)
    ),
)]
pub async fn create_member(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<MemberFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let member = MemberService::new(&state.db).create(payload).await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member", body = MemberDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let member = MemberService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    request_body = MemberFormDto,
    responses(
        (status = 200, description = "Member updated", body = MemberDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 422, description = "Invalid form fields", body = ValidationErrorDto)
    ),
)]
pub async fn update_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<MemberFormDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let member = MemberService::new(&state.db).update(id, payload).await?;

    Ok((StatusCode::OK, Json(member.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/members/{id}",
    tag = MEMBER_TAG,
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 204, description = "Member deleted"),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto)
    ),
)]
pub async fn delete_member(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    MemberService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Wraps CSV bytes as a UTF-8 file download.
pub fn csv_response(export: CsvExport) -> impl IntoResponse {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", export.filename),
            ),
        ],
        export.bytes,
    )
}
