use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::models::Registration;
use crate::domain::account::models::UserId;
use crate::domain::account::models::UserType;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::catalog::models::Restaurant;

/// Domain service implementation for registration and login.
///
/// Concrete implementation of AccountServicePort with dependency injection.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    authenticator: Authenticator,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    pub fn new(repository: Arc<AR>) -> Self {
        Self {
            repository,
            authenticator: Authenticator::new(),
        }
    }

    // Argon2 is CPU bound, keep it off the async workers.
    async fn hash_password(&self, password: String) -> Result<String, AccountError> {
        let authenticator = self.authenticator;

        tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| AccountError::Unknown(format!("Password hashing task failed: {}", e)))?
            .map_err(AccountError::from)
    }

    async fn verify_password(
        &self,
        password: String,
        password_hash: String,
    ) -> Result<(), AccountError> {
        let authenticator = self.authenticator;

        tokio::task::spawn_blocking(move || {
            authenticator.verify_credentials(&password, &password_hash)
        })
        .await
        .map_err(|e| AccountError::Unknown(format!("Password verification task failed: {}", e)))?
        .map_err(AccountError::from)
    }
}

#[async_trait]
impl<AR> AccountServicePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<Registration, AccountError> {
        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            tracing::info!(email = %command.email, "Registration rejected, account exists");
            return Err(AccountError::DuplicateAccount(command.email.to_string()));
        }

        let password_hash = self.hash_password(command.password).await?;

        let account = Account {
            id: UserId::new(),
            username: command.username,
            email: command.email,
            approval: command.usertype.initial_approval(),
            usertype: command.usertype,
            password_hash,
            created_at: Utc::now(),
        };

        let registration = if account.usertype == UserType::Restaurant {
            let restaurant =
                Restaurant::for_owner(account.id, &account.username, command.restaurant);

            let (account, restaurant) = self
                .repository
                .create_restaurant_owner(account, restaurant)
                .await
                .inspect_err(|e| {
                    tracing::error!(error = %e, "Failed to provision restaurant owner");
                })?;

            Registration {
                account,
                restaurant: Some(restaurant),
            }
        } else {
            Registration {
                account: self.repository.create(account).await?,
                restaurant: None,
            }
        };

        tracing::info!(
            user_id = %registration.account.id,
            usertype = %registration.account.usertype,
            approval = %registration.account.approval,
            "Account registered"
        );

        Ok(registration)
    }

    async fn login(&self, command: LoginCommand) -> Result<Account, AccountError> {
        let Some(account) = self.repository.find_by_email(&command.email).await? else {
            return Err(AccountError::InvalidCredentials);
        };

        self.verify_password(command.password, account.password_hash.clone())
            .await?;

        tracing::debug!(user_id = %account.id, "Login succeeded");

        Ok(account)
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, AccountError> {
        self.repository.list_all().await
    }
}
