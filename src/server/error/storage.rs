use thiserror::Error;

/// A document store operation failed.
///
/// Carries the collection and operation so the log line pinpoints the call.
#[derive(Error, Debug)]
#[error("Storage operation '{operation}' on '{collection}' failed: {source}")]
pub struct StorageError {
    pub collection: &'static str,
    pub operation: &'static str,
    #[source]
    pub source: sea_orm::DbErr,
}

impl StorageError {
    /// Message shown to users for any storage failure.
    pub const USER_MESSAGE: &'static str = "Ralat pangkalan data. Sila cuba lagi.";

    pub fn new(collection: &'static str, operation: &'static str, source: sea_orm::DbErr) -> Self {
        Self {
            collection,
            operation,
            source,
        }
    }
}
