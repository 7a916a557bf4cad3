use crate::{
    client::{
        api::helper::{
            delete, get, parse_empty_response, parse_response, post, put, send_request,
            serialize_json,
        },
        model::{
            error::ApiError,
            query::{members_url, with_query},
        },
    },
    model::member::{MemberDto, MemberFormDto, MemberListQuery},
};

pub async fn get_members(query: &MemberListQuery) -> Result<Vec<MemberDto>, ApiError> {
    let url = members_url("/api/admin/members", query);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

/// Members whose name contains `term`, for the donor picker.
pub async fn lookup_members(term: String) -> Result<Vec<MemberDto>, ApiError> {
    let url = with_query("/api/admin/members/lookup", &[("q", Some(term))]);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn get_member(id: i32) -> Result<MemberDto, ApiError> {
    let url = format!("/api/admin/members/{}", id);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_member(form: &MemberFormDto) -> Result<MemberDto, ApiError> {
    let body = serialize_json(form)?;
    let response = send_request(post("/api/admin/members").body(body)).await?;
    parse_response(response).await
}

pub async fn update_member(id: i32, form: &MemberFormDto) -> Result<MemberDto, ApiError> {
    let url = format!("/api/admin/members/{}", id);
    let body = serialize_json(form)?;
    let response = send_request(put(&url).body(body)).await?;
    parse_response(response).await
}

pub async fn delete_member(id: i32) -> Result<(), ApiError> {
    let url = format!("/api/admin/members/{}", id);
    let response = send_request(delete(&url)).await?;
    parse_empty_response(response).await
}
