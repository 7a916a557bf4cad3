use serde::Deserialize;
use utoipa::IntoParams;

/// Query for the donor picker's member lookup.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LookupParam {
    /// Part of the member's name, case-insensitive.
    #[serde(default)]
    pub q: String,
}
