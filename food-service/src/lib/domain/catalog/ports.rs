use async_trait::async_trait;

use super::errors::CatalogError;
use super::models::FoodItem;
use super::models::Restaurant;

/// Port for catalog read operations.
#[async_trait]
pub trait CatalogServicePort: Send + Sync + 'static {
    /// List every restaurant.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, CatalogError>;

    /// List every food item.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_food_items(&self) -> Result<Vec<FoodItem>, CatalogError>;
}

/// Persistence operations for restaurants and food items.
#[async_trait]
pub trait CatalogRepository: Send + Sync + 'static {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, CatalogError>;

    async fn list_food_items(&self) -> Result<Vec<FoodItem>, CatalogError>;

    /// Remove every restaurant. Used by the seeding utility.
    ///
    /// # Returns
    /// Number of deleted restaurants
    async fn delete_all_restaurants(&self) -> Result<u64, CatalogError>;

    /// Insert restaurants in order.
    async fn insert_restaurants(&self, restaurants: &[Restaurant]) -> Result<(), CatalogError>;
}
