/// Error types for cinelist
///
/// This module defines all possible errors that can occur in the application.
/// Uses thiserror for ergonomic error handling.

use thiserror::Error;

/// Main error type for cinelist operations
#[derive(Error, Debug)]
pub enum CinelistError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Status token that matches no canonical status
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// Title is empty once quotes and whitespace are stripped
    #[error("Title is empty")]
    EmptyTitle,

    /// Title not present in the catalog
    #[error("Title not found: {0}")]
    TitleNotFound(String),

    /// Storage backend fault that is not a database error
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for cinelist operations
pub type Result<T> = std::result::Result<T, CinelistError>;

/// Convert CinelistError to a user-friendly error message
impl CinelistError {
    pub fn user_message(&self) -> String {
        match self {
            CinelistError::Database(e) => {
                format!("Database error occurred. Please try again. Details: {}", e)
            }
            CinelistError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            CinelistError::Serialization(e) => {
                format!("Data format error: {}", e)
            }
            CinelistError::Config(msg) => {
                format!("Configuration issue: {}", msg)
            }
            CinelistError::InvalidStatus(status) => {
                format!(
                    "'{}' is not a known status (use wanted, seen or disliked)",
                    status
                )
            }
            CinelistError::EmptyTitle => "A title is required".to_string(),
            CinelistError::TitleNotFound(title) => {
                format!("'{}' is not in your catalog", title)
            }
            CinelistError::Storage(msg) => {
                format!("Catalog storage failed: {}", msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_messages() {
        let err = CinelistError::TitleNotFound("Dune".to_string());
        assert!(err.user_message().contains("Dune"));

        let err = CinelistError::InvalidStatus("maybe".to_string());
        assert!(err.user_message().contains("maybe"));
        assert!(err.user_message().contains("wanted"));
    }

    #[test]
    fn test_error_display() {
        let err = CinelistError::Storage("disk full".to_string());
        let display = format!("{}", err);
        assert!(display.contains("Storage error"));
        assert!(display.contains("disk full"));

        assert_eq!(CinelistError::EmptyTitle.to_string(), "Title is empty");
    }
}
