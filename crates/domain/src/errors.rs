//! Domain error types.

use thiserror::Error;

/// Failure reported by a [`CampusRepository`](crate::services::CampusRepository).
///
/// The message is the storage driver's own text and is surfaced to clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("{0}")]
    Database(String),

    #[error("{0}")]
    InvalidInput(String),
}

impl StoreError {
    pub fn database(message: impl Into<String>) -> Self {
        StoreError::Database(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_display_is_raw_message() {
        let err = StoreError::database("connection refused");
        assert_eq!(err.to_string(), "connection refused");

        let err = StoreError::InvalidInput("2 peers but 1 name".to_string());
        assert_eq!(err.to_string(), "2 peers but 1 name");
    }
}
