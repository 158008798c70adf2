use thiserror::Error;

/// Custom error type for investor-related operations
#[derive(Debug, Error)]
pub enum InvestorError {
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Constraint violation: {0}")]
    HasInvestments(String),
}
