use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::account::models::RestaurantProfile;
use crate::domain::account::models::UserId;
use crate::domain::account::models::Username;

/// Restaurant unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RestaurantId(pub Uuid);

impl RestaurantId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RestaurantId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RestaurantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Food item unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoodItemId(pub Uuid);

impl FoodItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for FoodItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FoodItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Restaurant profile owned by a restaurant-role account.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: RestaurantId,
    /// Owning account. Not enforced by the store.
    pub owner_id: UserId,
    pub title: String,
    pub address: Option<String>,
    pub main_img: Option<String>,
    /// Ordered menu, referencing food items.
    pub menu: Vec<FoodItemId>,
    pub created_at: DateTime<Utc>,
}

impl Restaurant {
    /// Build the restaurant provisioned for a newly registered owner.
    ///
    /// The title is the owner's username and the menu starts empty.
    pub fn for_owner(owner_id: UserId, title: &Username, profile: RestaurantProfile) -> Self {
        Self {
            id: RestaurantId::new(),
            owner_id,
            title: title.as_str().to_string(),
            address: profile.address,
            main_img: profile.main_img,
            menu: Vec::new(),
            created_at: Utc::now(),
        }
    }
}

/// Menu entry sold by a restaurant.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodItem {
    pub id: FoodItemId,
    pub title: String,
    pub description: Option<String>,
    pub item_img: Option<String>,
    pub item_type: Option<String>,
    pub menu_category: Option<String>,
    pub category: Option<String>,
    pub restaurant_id: RestaurantId,
    pub price: f64,
    pub discount: f64,
    pub rating: f64,
}
