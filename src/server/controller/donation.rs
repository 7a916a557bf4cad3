use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        donation::{CreateDonationDto, DonationDto, DonationListDto, DonationListQuery},
    },
    server::{
        controller::member::csv_response,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::donation::DonationService,
        state::AppState,
    },
};

pub static DONATION_TAG: &str = "donation";

/// Lists donations matching the filters along with overall stats.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - Filtered donations, newest transaction first, and stats over every
///   donation regardless of the filter
#[utoipa::path(
    get,
    path = "/api/admin/donations",
    tag = DONATION_TAG,
    params(DonationListQuery),
    responses(
        (status = 200, description = "Donations and stats", body = DonationListDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_donations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<DonationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let (donations, stats) = DonationService::new(&state.db)
        .list(query, state.local_now())
        .await?;

    Ok((
        StatusCode::OK,
        Json(DonationListDto {
            donations: donations.into_iter().map(|d| d.into_dto()).collect(),
            stats: stats.into_dto(),
        }),
    ))
}

/// Records a donation attributed to the signed-in admin.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/admin/donations",
    tag = DONATION_TAG,
    request_body = CreateDonationDto,
    responses(
        (status = 201, description = "Donation recorded", body = DonationDto),
        (status = 400, description = "Selected member does not exist", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 422, description = "Invalid form fields", body = ValidationErrorDto)
    ),
)]
pub async fn create_donation(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateDonationDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let donation = DonationService::new(&state.db)
        .create(payload, admin.uid)
        .await?;

    Ok((StatusCode::CREATED, Json(donation.into_dto())))
}

/// Downloads the filtered donation list as CSV.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - `derma-dd-MM-yyyy.csv` attachment
#[utoipa::path(
    get,
    path = "/api/admin/donations/export",
    tag = DONATION_TAG,
    params(DonationListQuery),
    responses(
        (status = 200, description = "CSV file", content_type = "text/csv"),
        (status = 401, description = "Not signed in", body = ErrorDto)
    ),
)]
pub async fn export_donations(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<DonationListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let export = DonationService::new(&state.db)
        .export(query, state.local_now())
        .await?;

    Ok(csv_response(export))
}
