//! Credential utilities library
//!
//! Provides the password handling shared by the food service binaries:
//! - Password hashing (Argon2id, fixed cost, random salt per digest)
//! - Credential verification with a uniform failure outcome
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Credential Verification
//! ```
//! use auth::{AuthenticationError, Authenticator};
//!
//! let auth = Authenticator::new();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify
//! assert!(auth.verify_credentials("password123", &hash).is_ok());
//! assert!(matches!(
//!     auth.verify_credentials("password124", &hash),
//!     Err(AuthenticationError::InvalidCredentials)
//! ));
//! ```

pub mod authenticator;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
