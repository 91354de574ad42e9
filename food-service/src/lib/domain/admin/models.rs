use crate::domain::catalog::models::RestaurantId;

/// Admin-curated settings.
///
/// Exactly one instance exists in the store. It is created empty the first
/// time it is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminSettings {
    pub categories: Vec<String>,
    /// Restaurants surfaced for featured placement, in display order.
    pub promoted_restaurants: Vec<RestaurantId>,
}
