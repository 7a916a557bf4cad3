//! Form validation with per-field Malay messages.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, sync::LazyLock};
use thiserror::Error;

static IC_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6}-\d{2}-\d{4}$").expect("valid IC regex"));
static PHONE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^01[0-9]-\d{7,8}$").expect("valid phone regex"));
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// The 16 states and federal territories offered on the member form.
pub const MALAYSIAN_STATES: [&str; 16] = [
    "Johor",
    "Kedah",
    "Kelantan",
    "Melaka",
    "Negeri Sembilan",
    "Pahang",
    "Pulau Pinang",
    "Perak",
    "Perlis",
    "Selangor",
    "Terengganu",
    "Sabah",
    "Sarawak",
    "WP Kuala Lumpur",
    "WP Labuan",
    "WP Putrajaya",
];

pub fn validate_ic_number(ic: &str) -> bool {
    IC_NUMBER.is_match(ic)
}

pub fn validate_phone_number(phone: &str) -> bool {
    PHONE_NUMBER.is_match(phone)
}

pub fn validate_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Field name to message map. Empty means the form is valid.
#[derive(Error, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[error("Sila semak maklumat yang dimasukkan")]
pub struct ValidationErrors {
    pub fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`, keeping the first message if one exists.
    pub fn add(&mut self, field: &str, message: &str) {
        self.fields
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    /// Records `message` when `value` is blank.
    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `Ok(())` when no field failed, otherwise `Err(self)`.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_grouped_ic_number_only() {
        assert!(validate_ic_number("900101-14-5678"));
        assert!(!validate_ic_number("900101145678"));
        assert!(!validate_ic_number("90010-14-5678"));
    }

    #[test]
    fn accepts_mobile_numbers() {
        assert!(validate_phone_number("012-3456789"));
        assert!(validate_phone_number("011-23456789"));
        assert!(!validate_phone_number("03-12345678"));
        assert!(!validate_phone_number("0123456789"));
    }

    #[test]
    fn accepts_plain_email_shapes() {
        assert!(validate_email("ahmad@masjid.my"));
        assert!(!validate_email("ahmad@masjid"));
        assert!(!validate_email("ahmad masjid@x.my"));
    }

    #[test]
    fn collects_first_message_per_field() {
        let mut errors = ValidationErrors::new();
        errors.require("full_name", "  ", "Nama diperlukan");
        errors.add("full_name", "Ignored");
        errors.require("city", "Shah Alam", "Bandar diperlukan");

        assert_eq!(errors.get("full_name"), Some("Nama diperlukan"));
        assert_eq!(errors.get("city"), None);
        assert!(errors.into_result().is_err());
    }

    #[test]
    fn lists_sixteen_states() {
        assert_eq!(MALAYSIAN_STATES.len(), 16);
        assert!(MALAYSIAN_STATES.contains(&"Selangor"));
    }
}
