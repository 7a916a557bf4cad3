//! Email and password sign-in against the hosted identity service.
//!
//! The identity service only proves who someone is and returns their uid. Whether
//! that uid may use the admin area is decided by `AuthService` from the stored
//! admin profile.

use async_trait::async_trait;
use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::server::error::auth::AuthError;

/// A successfully signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Provider user id, the key of the admin profile.
    pub uid: String,
    pub email: String,
}

/// Credential sign-in capability.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Verifies an email and password.
    ///
    /// # Returns
    /// - `Ok(Identity)` - Credentials accepted
    /// - `Err(AuthError)` - Rejected, with the provider's reason mapped to a variant
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError>;
}

/// Identity Toolkit REST client (`accounts:signInWithPassword`).
pub struct RestIdentityProvider {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    email: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl RestIdentityProvider {
    /// Creates a new RestIdentityProvider.
    ///
    /// # Arguments
    /// - `http_client` - Shared outbound HTTP client
    /// - `base_url` - Service base, e.g. `https://identitytoolkit.googleapis.com/v1`
    /// - `api_key` - Project API key sent as the `key` query parameter
    pub fn new(http_client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }

    fn sign_in_url(&self) -> Result<Url, AuthError> {
        let mut url = Url::parse(&format!(
            "{}/accounts:signInWithPassword",
            self.base_url.trim_end_matches('/')
        ))
        .map_err(|e| AuthError::Provider(format!("invalid identity base url: {}", e)))?;

        url.query_pairs_mut().append_pair("key", &self.api_key);

        Ok(url)
    }
}

#[async_trait]
impl IdentityProvider for RestIdentityProvider {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let response = self
            .http_client
            .post(self.sign_in_url()?)
            .json(&SignInRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| AuthError::Provider(e.to_string()))?;

        if response.status().is_success() {
            let body: SignInResponse = response
                .json()
                .await
                .map_err(|e| AuthError::Provider(e.to_string()))?;

            return Ok(Identity {
                uid: body.local_id,
                email: body.email,
            });
        }

        let status = response.status();
        match response.json::<ErrorResponse>().await {
            Ok(body) => Err(map_provider_error(&body.error.message)),
            Err(e) => {
                tracing::debug!("Unreadable identity error body ({}): {}", status, e);
                Err(AuthError::Provider(format!("identity service returned {}", status)))
            }
        }
    }
}

/// Maps an Identity Toolkit error message to an `AuthError`.
///
/// Messages may carry a detail suffix, as in
/// `TOO_MANY_ATTEMPTS_TRY_LATER : Access to this account has been temporarily disabled`.
pub fn map_provider_error(message: &str) -> AuthError {
    let code = message.split(" : ").next().unwrap_or(message).trim();

    match code {
        "EMAIL_NOT_FOUND" => AuthError::EmailNotFound,
        "INVALID_PASSWORD" => AuthError::WrongPassword,
        "INVALID_EMAIL" => AuthError::InvalidEmail,
        "TOO_MANY_ATTEMPTS_TRY_LATER" => AuthError::TooManyAttempts,
        "INVALID_LOGIN_CREDENTIALS" => AuthError::InvalidCredential,
        "USER_DISABLED" => AuthError::AccountInactive,
        _ => AuthError::Provider(message.to_string()),
    }
}
