use std::sync::Arc;

use async_trait::async_trait;

use super::errors::AdminError;
use super::ports::AdminRepository;
use super::ports::AdminServicePort;
use crate::domain::catalog::models::RestaurantId;

/// Domain service exposing the admin-curated lists.
pub struct AdminService<AR>
where
    AR: AdminRepository,
{
    repository: Arc<AR>,
}

impl<AR> AdminService<AR>
where
    AR: AdminRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> AdminServicePort for AdminService<AR>
where
    AR: AdminRepository,
{
    async fn fetch_categories(&self) -> Result<Vec<String>, AdminError> {
        let settings = self.repository.fetch_or_create().await?;
        Ok(settings.categories)
    }

    async fn fetch_promoted_list(&self) -> Result<Vec<RestaurantId>, AdminError> {
        let settings = self.repository.fetch_or_create().await?;
        Ok(settings.promoted_restaurants)
    }
}
