use std::collections::BTreeMap;

use crate::util::validate::ValidationErrors;

#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
    /// Per-field messages from a 422 response.
    pub fields: BTreeMap<String, String>,
}

impl ApiError {
    pub fn new(status: u64, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Per-field messages in the same shape the forms validate into.
    pub fn field_errors(&self) -> ValidationErrors {
        ValidationErrors {
            fields: self.fields.clone(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}
