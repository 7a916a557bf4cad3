use thiserror::Error;

use crate::model::UnknownVariant;

/// Internal issues indicating unexpected stored data or broken invariants.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value no variant matches.
    ///
    /// Results in a 500 Internal Server Error with a generic message.
    #[error("Stored value in {table}.{column} is invalid: {source}")]
    InvalidStoredValue {
        table: &'static str,
        column: &'static str,
        #[source]
        source: UnknownVariant,
    },

    /// The legacy export file could not be read or parsed.
    #[error("Failed to import legacy data from '{path}': {reason}")]
    LegacyImport { path: String, reason: String },
}
