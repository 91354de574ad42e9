use thiserror::Error;

/// Error type for restaurant and food item operations
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}
