use async_trait::async_trait;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::LoginCommand;
use crate::domain::account::models::RegisterCommand;
use crate::domain::account::models::Registration;
use crate::domain::catalog::models::Restaurant;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// Restaurant-role accounts start `pending` and get a linked restaurant
    /// with an empty menu. Every other role starts `approved`.
    ///
    /// # Arguments
    /// * `command` - Username, email, role, password and optional restaurant details
    ///
    /// # Returns
    /// The created account, plus its restaurant for the restaurant role
    ///
    /// # Errors
    /// * `DuplicateAccount` - Email is already registered
    /// * `Password` - Hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterCommand) -> Result<Registration, AccountError>;

    /// Check an email and password pair.
    ///
    /// # Arguments
    /// * `command` - Email and plaintext password
    ///
    /// # Returns
    /// The stored account
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password (indistinguishable)
    /// * `Password` - Stored digest is corrupt
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, command: LoginCommand) -> Result<Account, AccountError>;

    /// List every account, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_accounts(&self) -> Result<Vec<Account>, AccountError>;
}

/// Persistence operations for account aggregate.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// # Returns
    /// Created account
    ///
    /// # Errors
    /// * `DuplicateAccount` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, account: Account) -> Result<Account, AccountError>;

    /// Persist a restaurant-role account together with its restaurant.
    ///
    /// Both records are written atomically: on any failure neither exists.
    ///
    /// # Returns
    /// Created account and restaurant
    ///
    /// # Errors
    /// * `DuplicateAccount` - Email is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create_restaurant_owner(
        &self,
        account: Account,
        restaurant: Restaurant,
    ) -> Result<(Account, Restaurant), AccountError>;

    /// Retrieve account by email address.
    ///
    /// # Returns
    /// Optional account (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;

    /// Retrieve all accounts, newest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Account>, AccountError>;
}
