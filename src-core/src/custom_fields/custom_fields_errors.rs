use thiserror::Error;

/// Custom error type for custom-field operations
#[derive(Debug, Error)]
pub enum CustomFieldError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
