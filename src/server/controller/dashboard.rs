use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::DashboardStatsDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::dashboard::DashboardService,
        state::AppState,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Stat cards for the admin dashboard.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStatsDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard_stats(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let stats = DashboardService::new(&state.db)
        .stats(state.local_now().date_naive())
        .await?;

    Ok((StatusCode::OK, Json(stats)))
}
