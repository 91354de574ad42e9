use async_trait::async_trait;
use sqlx::postgres::PgExecutor;
use sqlx::postgres::PgRow;
use sqlx::PgPool;
use sqlx::Row;

use super::catalog::insert_restaurant;
use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::Approval;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::UserId;
use crate::domain::account::models::UserType;
use crate::domain::account::models::Username;
use crate::domain::account::ports::AccountRepository;
use crate::domain::catalog::models::Restaurant;

pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_account(row: &PgRow) -> Result<Account, AccountError> {
        let column = |e: sqlx::Error| AccountError::DatabaseError(e.to_string());

        let approval: String = row.try_get("approval").map_err(column)?;
        let approval = Approval::parse(&approval).ok_or_else(|| {
            AccountError::DatabaseError(format!("Unknown approval state: {}", approval))
        })?;

        Ok(Account {
            id: UserId(row.try_get("id").map_err(column)?),
            username: Username::new(row.try_get("username").map_err(column)?)?,
            email: EmailAddress::new(row.try_get("email").map_err(column)?)?,
            usertype: UserType::from(row.try_get::<String, _>("usertype").map_err(column)?),
            password_hash: row.try_get("password_hash").map_err(column)?,
            approval,
            created_at: row.try_get("created_at").map_err(column)?,
        })
    }

    async fn insert_account<'e, E>(executor: E, account: &Account) -> Result<(), AccountError>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, email, usertype, password_hash, approval, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(account.id.0)
        .bind(account.username.as_str())
        .bind(account.email.as_str())
        .bind(account.usertype.as_str())
        .bind(&account.password_hash)
        .bind(account.approval.as_str())
        .bind(account.created_at)
        .execute(executor)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation() && db_err.constraint() == Some("users_email_key") {
                    return AccountError::DuplicateAccount(account.email.as_str().to_string());
                }
            }
            AccountError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}

#[async_trait]
impl AccountRepository for PostgresAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, AccountError> {
        Self::insert_account(&self.pool, &account).await?;
        Ok(account)
    }

    async fn create_restaurant_owner(
        &self,
        account: Account,
        restaurant: Restaurant,
    ) -> Result<(Account, Restaurant), AccountError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        // Dropping the transaction on an early return rolls both inserts back.
        Self::insert_account(&mut *tx, &account).await?;
        insert_restaurant(&mut *tx, &restaurant)
            .await
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        Ok((account, restaurant))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, usertype, password_hash, approval, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        row.as_ref().map(Self::row_to_account).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountError> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, email, usertype, password_hash, approval, created_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AccountError::DatabaseError(e.to_string()))?;

        rows.iter().map(Self::row_to_account).collect()
    }
}
