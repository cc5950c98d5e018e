//! Error types for Journalicious core operations.
//!
//! Every layer below the controllers reports failures through `JournalError`.
//! Controllers are the only place these are turned into user-facing feedback.

use thiserror::Error;

/// Result type alias for Journalicious operations.
pub type Result<T> = std::result::Result<T, JournalError>;

/// Core error type for Journalicious operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Backing store unreadable or unwritable
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid domain input (bad date, out-of-range time, rejected password)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entry asked for by id does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Incorrect password or security answer
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Transition the navigation state machine cannot perform
    #[error("Navigation error: {0}")]
    Navigation(String),
}

impl From<std::io::Error> for JournalError {
    fn from(err: std::io::Error) -> Self {
        JournalError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for JournalError {
    fn from(err: rusqlite::Error) -> Self {
        JournalError::Storage(format!("SQLite error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_maps_to_storage() {
        let err: JournalError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert!(matches!(err, JournalError::Storage(_)));
    }

    #[test]
    fn test_messages_carry_kind_prefix() {
        assert_eq!(
            JournalError::Auth("Incorrect password".into()).to_string(),
            "Authentication failed: Incorrect password"
        );
        assert!(JournalError::Storage("disk".into())
            .to_string()
            .starts_with("Storage error"));
    }
}
