use async_trait::async_trait;
use sqlx::postgres::PgExecutor;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::account::models::UserId;
use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::models::FoodItem;
use crate::domain::catalog::models::FoodItemId;
use crate::domain::catalog::models::Restaurant;
use crate::domain::catalog::models::RestaurantId;
use crate::domain::catalog::ports::CatalogRepository;

pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_restaurant(row: &PgRow) -> Result<Restaurant, sqlx::Error> {
        let menu: Vec<Uuid> = row.try_get("menu")?;

        Ok(Restaurant {
            id: RestaurantId(row.try_get("id")?),
            owner_id: UserId(row.try_get("owner_id")?),
            title: row.try_get("title")?,
            address: row.try_get("address")?,
            main_img: row.try_get("main_img")?,
            menu: menu.into_iter().map(FoodItemId).collect(),
            created_at: row.try_get("created_at")?,
        })
    }

    fn row_to_food_item(row: &PgRow) -> Result<FoodItem, sqlx::Error> {
        Ok(FoodItem {
            id: FoodItemId(row.try_get("id")?),
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            item_img: row.try_get("item_img")?,
            item_type: row.try_get("item_type")?,
            menu_category: row.try_get("menu_category")?,
            category: row.try_get("category")?,
            restaurant_id: RestaurantId(row.try_get("restaurant_id")?),
            price: row.try_get("price")?,
            discount: row.try_get("discount")?,
            rating: row.try_get("rating")?,
        })
    }
}

/// Insert one restaurant row.
///
/// Shared with the account repository, which runs it inside the
/// restaurant-owner registration transaction.
pub(super) async fn insert_restaurant<'e, E>(
    executor: E,
    restaurant: &Restaurant,
) -> Result<(), sqlx::Error>
where
    E: PgExecutor<'e>,
{
    let menu: Vec<Uuid> = restaurant.menu.iter().map(|id| id.0).collect();

    sqlx::query(
        r#"
        INSERT INTO restaurants (id, owner_id, title, address, main_img, menu, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(restaurant.id.0)
    .bind(restaurant.owner_id.0)
    .bind(&restaurant.title)
    .bind(restaurant.address.as_deref())
    .bind(restaurant.main_img.as_deref())
    .bind(menu)
    .bind(restaurant.created_at)
    .execute(executor)
    .await?;

    Ok(())
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>, CatalogError> {
        let rows = sqlx::query(
            r#"
            SELECT id, owner_id, title, address, main_img, menu, created_at
            FROM restaurants
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        rows.iter()
            .map(Self::row_to_restaurant)
            .collect::<Result<_, _>>()
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))
    }

    async fn list_food_items(&self) -> Result<Vec<FoodItem>, CatalogError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, item_img, item_type, menu_category, category,
                   restaurant_id, price, discount, rating
            FROM food_items
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        rows.iter()
            .map(Self::row_to_food_item)
            .collect::<Result<_, _>>()
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))
    }

    async fn delete_all_restaurants(&self) -> Result<u64, CatalogError> {
        let result = sqlx::query("DELETE FROM restaurants")
            .execute(&self.pool)
            .await
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }

    async fn insert_restaurants(&self, restaurants: &[Restaurant]) -> Result<(), CatalogError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;

        for restaurant in restaurants {
            insert_restaurant(&mut *tx, restaurant)
                .await
                .map_err(|e| CatalogError::DatabaseError(e.to_string()))?;
        }

        tx.commit()
            .await
            .map_err(|e| CatalogError::DatabaseError(e.to_string()))
    }
}
