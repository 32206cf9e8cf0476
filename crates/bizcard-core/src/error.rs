//! Error types for BizCard

use thiserror::Error;

/// Main error type for BizCard operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Key/value store could not be used
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed or written
    #[error("Config error: {0}")]
    Config(String),

    /// A field value was rejected
    #[error("Invalid value for {field}: {message}")]
    Validation { field: String, message: String },

    /// Card was not found
    #[error("Card not found: {0}")]
    CardNotFound(String),

    /// Verification or reset token missing or rejected
    #[error("Invalid or expired token")]
    InvalidToken,

    /// The pending operation was cancelled before it completed
    #[error("Operation cancelled")]
    Cancelled,

    /// HTTP request failed
    #[error("Network error: {0}")]
    Network(String),

    /// QR form fields cannot produce a payload
    #[error("Invalid QR input: {0}")]
    InvalidQrInput(String),
}

impl CardError {
    /// Shorthand for a validation error on a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CardError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Translation key for the generic alert shown when this error reaches a view.
    pub fn alert_key(&self) -> &'static str {
        match self {
            CardError::CardNotFound(_) => "errors.cardNotFound",
            CardError::InvalidToken => "errors.invalidToken",
            CardError::Network(_) => "errors.network",
            CardError::Validation { .. } | CardError::InvalidQrInput(_) => "errors.validation",
            CardError::Cancelled => "errors.cancelled",
            _ => "errors.generic",
        }
    }
}

impl From<serde_json::Error> for CardError {
    fn from(e: serde_json::Error) -> Self {
        CardError::Serialization(e.to_string())
    }
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CardError::CardNotFound("abc".to_string());
        assert_eq!(format!("{}", err), "Card not found: abc");

        let err = CardError::validation("email", "bad format");
        assert_eq!(format!("{}", err), "Invalid value for email: bad format");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CardError = io_err.into();
        assert!(matches!(err, CardError::Io(_)));
    }

    #[test]
    fn test_alert_keys() {
        assert_eq!(CardError::InvalidToken.alert_key(), "errors.invalidToken");
        assert_eq!(CardError::Storage("x".into()).alert_key(), "errors.generic");
        assert_eq!(
            CardError::CardNotFound("x".into()).alert_key(),
            "errors.cardNotFound"
        );
    }
}
