use thiserror::Error;

/// Error type for admin settings operations
#[derive(Debug, Clone, Error)]
pub enum AdminError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
