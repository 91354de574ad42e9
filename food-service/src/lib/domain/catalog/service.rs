use std::sync::Arc;

use async_trait::async_trait;

use super::errors::CatalogError;
use super::models::FoodItem;
use super::models::Restaurant;
use super::ports::CatalogRepository;
use super::ports::CatalogServicePort;

/// Domain service for restaurant and food item listings.
pub struct CatalogService<CR>
where
    CR: CatalogRepository,
{
    repository: Arc<CR>,
}

impl<CR> CatalogService<CR>
where
    CR: CatalogRepository,
{
    pub fn new(repository: Arc<CR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<CR> CatalogServicePort for CatalogService<CR>
where
    CR: CatalogRepository,
{
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, CatalogError> {
        self.repository.list_restaurants().await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to list restaurants");
        })
    }

    async fn list_food_items(&self) -> Result<Vec<FoodItem>, CatalogError> {
        self.repository.list_food_items().await.inspect_err(|e| {
            tracing::error!(error = %e, "Failed to list food items");
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::account::models::UserId;
    use crate::domain::catalog::models::FoodItemId;
    use crate::domain::catalog::models::RestaurantId;

    mock! {
        pub TestCatalogRepository {}

        #[async_trait]
        impl CatalogRepository for TestCatalogRepository {
            async fn list_restaurants(&self) -> Result<Vec<Restaurant>, CatalogError>;
            async fn list_food_items(&self) -> Result<Vec<FoodItem>, CatalogError>;
            async fn delete_all_restaurants(&self) -> Result<u64, CatalogError>;
            async fn insert_restaurants(&self, restaurants: &[Restaurant]) -> Result<(), CatalogError>;
        }
    }

    #[tokio::test]
    async fn test_list_restaurants() {
        let mut repository = MockTestCatalogRepository::new();

        let restaurant = Restaurant {
            id: RestaurantId::new(),
            owner_id: UserId::new(),
            title: "Paradise Biryani".to_string(),
            address: Some("Hyderabad, India".to_string()),
            main_img: None,
            menu: vec![FoodItemId::new()],
            created_at: Utc::now(),
        };
        let returned = restaurant.clone();

        repository
            .expect_list_restaurants()
            .times(1)
            .returning(move || Ok(vec![returned.clone()]));

        let service = CatalogService::new(Arc::new(repository));

        let restaurants = service.list_restaurants().await.unwrap();
        assert_eq!(restaurants, vec![restaurant]);
    }

    #[tokio::test]
    async fn test_list_food_items_propagates_database_error() {
        let mut repository = MockTestCatalogRepository::new();

        repository
            .expect_list_food_items()
            .times(1)
            .returning(|| Err(CatalogError::DatabaseError("connection reset".to_string())));

        let service = CatalogService::new(Arc::new(repository));

        let result = service.list_food_items().await;
        assert!(matches!(result, Err(CatalogError::DatabaseError(_))));
    }
}
