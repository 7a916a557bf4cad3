use crate::client::model::error::ApiError;

/// Result of a page-level fetch.
#[derive(Clone, PartialEq)]
pub enum Cache<T> {
    Loading,
    Fetched(T),
    Error(ApiError),
}

impl<T> Default for Cache<T> {
    fn default() -> Self {
        Cache::Loading
    }
}

impl<T> Cache<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Cache::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Cache::Fetched(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Cache::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, ApiError>> for Cache<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Cache::Fetched(data),
            Err(err) => Cache::Error(err),
        }
    }
}
