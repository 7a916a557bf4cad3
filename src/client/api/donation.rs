use crate::{
    client::{
        api::helper::{get, parse_response, post, send_request, serialize_json},
        model::{error::ApiError, query::donations_url},
    },
    model::donation::{CreateDonationDto, DonationDto, DonationListDto, DonationListQuery},
};

/// Filtered donations plus stats over every donation.
pub async fn get_donations(query: &DonationListQuery) -> Result<DonationListDto, ApiError> {
    let url = donations_url("/api/admin/donations", query);
    let response = send_request(get(&url)).await?;
    parse_response(response).await
}

pub async fn create_donation(payload: &CreateDonationDto) -> Result<DonationDto, ApiError> {
    let body = serialize_json(payload)?;
    let response = send_request(post("/api/admin/donations").body(body)).await?;
    parse_response(response).await
}
