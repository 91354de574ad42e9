use thiserror::Error;

/// Failure while producing or checking a password digest.
///
/// A plain mismatch is never reported through this type.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Password verification failed: {0}")]
    VerificationFailed(String),
}
