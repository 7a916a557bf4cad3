//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by every controller. Domain errors
//! (`AuthError`, `StorageError`, `ValidationErrors`, `ExternalFetchError`) map to their
//! own status codes and localized messages; everything else becomes a logged 500 with
//! a generic body.

pub mod auth;
pub mod config;
pub mod fetch;
pub mod internal;
pub mod storage;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ValidationErrorDto},
    server::error::{
        auth::AuthError, config::ConfigError, fetch::ExternalFetchError, internal::InternalError,
        storage::StorageError,
    },
    util::validate::ValidationErrors,
};

/// Generic body for unexpected failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "Ralat dalaman pelayan";

/// Top-level application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Sign-in or access failure, mapped to 401/403/429 by `AuthError`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Document store failure with the collection and operation that failed.
    ///
    /// Results in 500 with a localized message; the details are logged.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Submitted form failed validation.
    ///
    /// Results in 422 Unprocessable Entity with the per-field messages.
    #[error(transparent)]
    ValidationErr(#[from] ValidationErrors),

    /// Prayer-time source unreachable or returned a non-OK status.
    ///
    /// Results in 503 Service Unavailable.
    #[error(transparent)]
    FetchErr(#[from] ExternalFetchError),

    /// Database error outside of a repository call (startup, migrations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx driver error from the session store migration.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Outbound HTTP error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// CSV writer error during export.
    #[error(transparent)]
    CsvErr(#[from] csv::Error),

    /// Unexpected state inside the application.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found, 404 with the given message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request, 400 with the given message.
    #[error("{0}")]
    BadRequest(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - `BadRequest`
/// - 404 Not Found - `NotFound`
/// - 422 Unprocessable Entity - `ValidationErr`
/// - 503 Service Unavailable - `FetchErr`
/// - Variable - `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - storage failures and everything else
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorDto {
                    error: err.to_string(),
                    fields: err.fields,
                }),
            )
                .into_response(),
            Self::FetchErr(err) => {
                tracing::error!("{:?}", err);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto {
                        error: err.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::StorageErr(err) => {
                tracing::error!("{}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: StorageError::USER_MESSAGE.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a logged 500 response.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: INTERNAL_ERROR_MESSAGE.to_string(),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_domain_errors_to_status_codes() {
        let mut fields = ValidationErrors::new();
        fields.add("amount", "Sila masukkan jumlah yang sah");

        let cases = [
            (AppError::from(fields), StatusCode::UNPROCESSABLE_ENTITY),
            (
                AppError::from(ExternalFetchError::PrayerTimesUnavailable("SGR01".into())),
                StatusCode::SERVICE_UNAVAILABLE,
            ),
            (
                AppError::from(StorageError::new(
                    "member",
                    "get_by_id",
                    sea_orm::DbErr::Custom("boom".into()),
                )),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::NotFound("Ahli tidak dijumpai".into()),
                StatusCode::NOT_FOUND,
            ),
            (AppError::from(AuthError::NotLoggedIn), StatusCode::UNAUTHORIZED),
            (
                AppError::from(AuthError::AccountInactive),
                StatusCode::FORBIDDEN,
            ),
            (
                AppError::from(AuthError::TooManyAttempts),
                StatusCode::TOO_MANY_REQUESTS,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
