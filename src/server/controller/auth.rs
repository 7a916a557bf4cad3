use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        auth::{AdminUserDto, LoginDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::auth::AuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Signs in an admin with email and password.
///
/// # Access Control
/// - `Public` - Rate limited
///
/// # Returns
/// - `200 OK` - Signed-in admin profile; the session cookie now carries the uid
/// - `400 Bad Request` - Malformed email
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `403 Forbidden` - Profile missing, inactive, or without an admin role
/// - `429 Too Many Requests` - Too many attempts
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Signed in", body = AdminUserDto),
        (status = 400, description = "Malformed email", body = ErrorDto),
        (status = 401, description = "Wrong email or password", body = ErrorDto),
        (status = 403, description = "Profile missing, inactive or not an admin", body = ErrorDto),
        (status = 429, description = "Too many sign-in attempts", body = ErrorDto),
        (status = 502, description = "Identity service failure", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthService::new(&state.db, state.identity.as_ref())
        .login(&session, &payload.email, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(admin.into_dto())))
}

/// Ends the current session.
///
/// # Access Control
/// - `Public`
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared")
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthService::logout(&session).await;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the signed-in admin.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed-in admin profile", body = AdminUserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Profile no longer allowed in", body = ErrorDto)
    ),
)]
pub async fn get_current_admin(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    Ok((StatusCode::OK, Json(admin.into_dto())))
}
