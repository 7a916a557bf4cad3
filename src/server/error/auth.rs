use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Sign-in and access failures with their user-facing Malay messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email tidak dijumpai")]
    EmailNotFound,

    #[error("Kata laluan salah")]
    WrongPassword,

    #[error("Format email tidak sah")]
    InvalidEmail,

    /// Provider is rate limiting sign-in attempts.
    #[error("Terlalu banyak cubaan. Sila cuba sebentar lagi.")]
    TooManyAttempts,

    #[error("Email atau kata laluan salah")]
    InvalidCredential,

    /// Provider accepted the credentials but there is no admin profile for the uid.
    #[error("User tidak dijumpai dalam sistem")]
    ProfileNotFound,

    #[error("Akaun tidak aktif. Sila hubungi pentadbir.")]
    AccountInactive,

    /// Profile role is not allowed into the admin area.
    #[error("Akaun anda tiada kebenaran pentadbir.")]
    RoleNotPermitted,

    /// No admin uid in the session.
    #[error("Sila log masuk")]
    NotLoggedIn,

    /// Unrecognised provider failure; the provider's message is logged only.
    #[error("Log masuk gagal. Sila cuba lagi.")]
    Provider(String),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmailNotFound
            | Self::WrongPassword
            | Self::InvalidCredential
            | Self::NotLoggedIn => StatusCode::UNAUTHORIZED,
            Self::InvalidEmail => StatusCode::BAD_REQUEST,
            Self::TooManyAttempts => StatusCode::TOO_MANY_REQUESTS,
            Self::ProfileNotFound | Self::AccountInactive | Self::RoleNotPermitted => {
                StatusCode::FORBIDDEN
            }
            Self::Provider(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Converts authentication errors into HTTP responses carrying the Malay message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if let Self::Provider(detail) = &self {
            tracing::error!("Identity provider error: {}", detail);
        } else {
            tracing::debug!("Auth error: {:?}", self);
        }

        (
            self.status(),
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
