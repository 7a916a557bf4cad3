//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Stored enum columns are parsed
//! into their typed variants here, so a bad value in the database surfaces as an
//! `InternalError` rather than leaking into a response.

pub mod admin_user;
pub mod announcement;
pub mod donation;
pub mod member;

use std::str::FromStr;

use crate::{model::UnknownVariant, server::error::internal::InternalError};

/// Parses a stored enum column into its typed variant.
///
/// # Arguments
/// - `table` - Table the value was read from, for the error
/// - `column` - Column the value was read from, for the error
/// - `value` - Stored string
///
/// # Returns
/// - `Ok(T)` - Parsed variant
/// - `Err(InternalError::InvalidStoredValue)` - No variant matches the stored string
pub(crate) fn parse_stored<T>(
    table: &'static str,
    column: &'static str,
    value: &str,
) -> Result<T, InternalError>
where
    T: FromStr<Err = UnknownVariant>,
{
    value
        .parse()
        .map_err(|source| InternalError::InvalidStoredValue {
            table,
            column,
            source,
        })
}

/// Trims a free-text field and drops it when nothing is left.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
