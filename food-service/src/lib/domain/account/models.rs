use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::account::errors::EmailError;
use crate::domain::account::errors::UsernameError;
use crate::domain::catalog::models::Restaurant;

/// Account aggregate entity.
///
/// A registered user identified by email, holding role and approval state.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub usertype: UserType,
    pub password_hash: String,
    pub approval: Approval,
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Projection without credential fields, safe to hand to callers.
    pub fn view(&self) -> AccountView {
        AccountView {
            id: self.id,
            username: self.username.clone(),
            email: self.email.clone(),
            usertype: self.usertype.clone(),
            approval: self.approval,
            created_at: self.created_at,
        }
    }
}

/// Public projection of an [`Account`].
///
/// Carries no password digest, so it can be returned from any endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountView {
    pub id: UserId,
    pub username: Username,
    pub email: EmailAddress,
    pub usertype: UserType,
    pub approval: Approval,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Username value type
///
/// Only presence is checked: a username must not be blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Create a new username.
    ///
    /// # Errors
    /// * `Empty` - Username is empty or whitespace only
    pub fn new(username: String) -> Result<Self, UsernameError> {
        if username.trim().is_empty() {
            Err(UsernameError::Empty)
        } else {
            Ok(Self(username))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Email address type
///
/// Natural key of an account. Stored verbatim; only presence is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new email address.
    ///
    /// # Errors
    /// * `Empty` - Email is empty or whitespace only
    pub fn new(email: String) -> Result<Self, EmailError> {
        if email.trim().is_empty() {
            Err(EmailError::Empty)
        } else {
            Ok(Self(email))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Role an account registers with.
///
/// Unrecognised roles are kept verbatim in `Other` and treated like customers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserType {
    Customer,
    Restaurant,
    Admin,
    Other(String),
}

impl UserType {
    pub fn as_str(&self) -> &str {
        match self {
            UserType::Customer => "customer",
            UserType::Restaurant => "restaurant",
            UserType::Admin => "admin",
            UserType::Other(s) => s,
        }
    }

    /// Approval state a freshly registered account of this role starts in.
    pub fn initial_approval(&self) -> Approval {
        match self {
            UserType::Restaurant => Approval::Pending,
            _ => Approval::Approved,
        }
    }
}

impl From<String> for UserType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "customer" => UserType::Customer,
            "restaurant" => UserType::Restaurant,
            "admin" => UserType::Admin,
            _ => UserType::Other(s),
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an account may operate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approval {
    Pending,
    Approved,
}

impl Approval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Approval::Pending => "pending",
            Approval::Approved => "approved",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Approval::Pending),
            "approved" => Some(Approval::Approved),
            _ => None,
        }
    }
}

impl fmt::Display for Approval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Restaurant details supplied alongside a restaurant-role registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestaurantProfile {
    pub address: Option<String>,
    pub main_img: Option<String>,
}

/// Command to register a new account with domain types
#[derive(Debug)]
pub struct RegisterCommand {
    pub username: Username,
    pub email: EmailAddress,
    pub usertype: UserType,
    pub password: String,
    pub restaurant: RestaurantProfile,
}

impl RegisterCommand {
    /// Construct a new registration command.
    ///
    /// # Arguments
    /// * `username` - Non-empty username
    /// * `email` - Non-empty email address
    /// * `usertype` - Role to register with
    /// * `password` - Plain text password (hashed by the service)
    /// * `restaurant` - Restaurant details, only used for the restaurant role
    pub fn new(
        username: Username,
        email: EmailAddress,
        usertype: UserType,
        password: String,
        restaurant: RestaurantProfile,
    ) -> Self {
        Self {
            username,
            email,
            usertype,
            password,
            restaurant,
        }
    }
}

/// Command to log in with an email and password
#[derive(Debug)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
}

/// Outcome of a successful registration.
///
/// `restaurant` is set exactly when the account registered with the
/// restaurant role.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub account: Account,
    pub restaurant: Option<Restaurant>,
}
