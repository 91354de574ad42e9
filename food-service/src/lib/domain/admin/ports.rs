use async_trait::async_trait;

use super::errors::AdminError;
use super::models::AdminSettings;
use crate::domain::catalog::models::RestaurantId;

/// Port for admin settings read operations.
#[async_trait]
pub trait AdminServicePort: Send + Sync + 'static {
    /// Categories shown to customers.
    ///
    /// # Returns
    /// Category names (empty when the settings were just created)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn fetch_categories(&self) -> Result<Vec<String>, AdminError>;

    /// Restaurants promoted for featured placement.
    ///
    /// # Returns
    /// Restaurant identifiers (empty when the settings were just created)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn fetch_promoted_list(&self) -> Result<Vec<RestaurantId>, AdminError>;
}

/// Persistence operations for the admin settings singleton.
#[async_trait]
pub trait AdminRepository: Send + Sync + 'static {
    /// Return the settings, creating an empty instance if none exists.
    ///
    /// Idempotent: concurrent or repeated calls never create a second
    /// instance.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn fetch_or_create(&self) -> Result<AdminSettings, AdminError>;

    /// Replace the stored settings, creating them if absent.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn save(&self, settings: &AdminSettings) -> Result<(), AdminError>;

    /// Remove the stored settings.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn clear(&self) -> Result<(), AdminError>;
}
