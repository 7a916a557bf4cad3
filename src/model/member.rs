use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    model::string_enum,
    util::validate::{
        validate_email, validate_ic_number, validate_phone_number, ValidationErrors,
        MALAYSIAN_STATES,
    },
};

string_enum! {
    Gender as "gender" {
        Male => "male", "Lelaki";
        Female => "female", "Perempuan";
    }
}

string_enum! {
    MemberStatus as "member status" {
        Active => "active", "Aktif";
        Inactive => "inactive", "Tidak Aktif";
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MemberDto {
    pub id: i32,
    pub full_name: String,
    pub ic_number: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub state: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub status: MemberStatus,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or editing a member.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct MemberFormDto {
    pub full_name: String,
    pub ic_number: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub address: String,
    pub postcode: String,
    pub city: String,
    pub state: String,
    pub date_of_birth: Option<NaiveDate>,
    pub gender: Gender,
    pub status: MemberStatus,
    #[serde(default)]
    pub notes: String,
}

impl Default for MemberFormDto {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            ic_number: String::new(),
            phone_number: String::new(),
            email: None,
            address: String::new(),
            postcode: String::new(),
            city: String::new(),
            state: String::new(),
            date_of_birth: None,
            gender: Gender::Male,
            status: MemberStatus::Active,
            notes: String::new(),
        }
    }
}

impl MemberFormDto {
    /// Checks every field, collecting one Malay message per invalid field.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        errors.require("full_name", &self.full_name, "Nama diperlukan");
        if !validate_ic_number(self.ic_number.trim()) {
            errors.add("ic_number", "No. KP tidak sah (format: 123456-12-1234)");
        }
        if !validate_phone_number(self.phone_number.trim()) {
            errors.add("phone_number", "No. telefon tidak sah (format: 01X-XXXXXXX)");
        }
        if let Some(email) = self.email.as_deref().filter(|e| !e.trim().is_empty()) {
            if !validate_email(email.trim()) {
                errors.add("email", "Format email tidak sah");
            }
        }
        errors.require("address", &self.address, "Alamat diperlukan");
        errors.require("postcode", &self.postcode, "Poskod diperlukan");
        errors.require("city", &self.city, "Bandar diperlukan");
        if !MALAYSIAN_STATES.contains(&self.state.as_str()) {
            errors.add("state", "Negeri diperlukan");
        }

        errors.into_result()
    }
}

/// Query string for the admin member list.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "server", derive(utoipa::IntoParams), into_params(parameter_in = Query))]
pub struct MemberListQuery {
    /// Matched against name, IC number, email and phone.
    pub search: Option<String>,
    pub status: Option<MemberStatus>,
    pub gender: Option<Gender>,
}
