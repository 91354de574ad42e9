use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;
use uuid::Uuid;

use crate::domain::admin::errors::AdminError;
use crate::domain::admin::models::AdminSettings;
use crate::domain::admin::ports::AdminRepository;
use crate::domain::catalog::models::RestaurantId;

/// Key of the only admin settings row.
const SETTINGS_ID: i16 = 1;

pub struct PostgresAdminRepository {
    pool: PgPool,
}

impl PostgresAdminRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_settings(row: &PgRow) -> Result<AdminSettings, sqlx::Error> {
        let promoted: Vec<Uuid> = row.try_get("promoted_restaurants")?;

        Ok(AdminSettings {
            categories: row.try_get("categories")?,
            promoted_restaurants: promoted.into_iter().map(RestaurantId).collect(),
        })
    }
}

#[async_trait]
impl AdminRepository for PostgresAdminRepository {
    async fn fetch_or_create(&self) -> Result<AdminSettings, AdminError> {
        let inserted = sqlx::query(
            r#"
            INSERT INTO admin_settings (id)
            VALUES ($1)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(SETTINGS_ID)
        .execute(&self.pool)
        .await
        .map_err(|e| AdminError::DatabaseError(e.to_string()))?;

        if inserted.rows_affected() > 0 {
            tracing::info!("Created empty admin settings");
        }

        let row = sqlx::query(
            r#"
            SELECT categories, promoted_restaurants
            FROM admin_settings
            WHERE id = $1
            "#,
        )
        .bind(SETTINGS_ID)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AdminError::DatabaseError(e.to_string()))?;

        Self::row_to_settings(&row).map_err(|e| AdminError::DatabaseError(e.to_string()))
    }

    async fn save(&self, settings: &AdminSettings) -> Result<(), AdminError> {
        let promoted: Vec<Uuid> = settings.promoted_restaurants.iter().map(|id| id.0).collect();

        sqlx::query(
            r#"
            INSERT INTO admin_settings (id, categories, promoted_restaurants)
            VALUES ($1, $2, $3)
            ON CONFLICT (id) DO UPDATE
            SET categories = EXCLUDED.categories,
                promoted_restaurants = EXCLUDED.promoted_restaurants
            "#,
        )
        .bind(SETTINGS_ID)
        .bind(&settings.categories)
        .bind(promoted)
        .execute(&self.pool)
        .await
        .map_err(|e| AdminError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn clear(&self) -> Result<(), AdminError> {
        sqlx::query("DELETE FROM admin_settings")
            .execute(&self.pool)
            .await
            .map_err(|e| AdminError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
