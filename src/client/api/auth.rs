use crate::{
    client::{
        api::helper::{get, parse_empty_response, parse_response, post, send_request, serialize_json},
        model::error::ApiError,
    },
    model::auth::{AdminUserDto, LoginDto},
};

pub async fn login(email: String, password: String) -> Result<AdminUserDto, ApiError> {
    let body = serialize_json(&LoginDto { email, password })?;
    let response = send_request(post("/api/auth/login").body(body)).await?;
    parse_response(response).await
}

pub async fn logout() -> Result<(), ApiError> {
    let response = send_request(post("/api/auth/logout")).await?;
    parse_empty_response(response).await
}

/// Signed-in admin, or `None` when the session is missing or no longer valid.
pub async fn get_current_admin() -> Result<Option<AdminUserDto>, ApiError> {
    let response = send_request(get("/api/auth/me")).await?;
    match parse_response(response).await {
        Ok(admin) => Ok(Some(admin)),
        Err(err) if err.status == 401 || err.status == 403 => Ok(None),
        Err(err) => Err(err),
    }
}
