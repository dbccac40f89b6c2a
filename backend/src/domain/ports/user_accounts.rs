//! Driving port for account registration and login.
//!
//! Inbound adapters call this port without knowing which store, hasher, or
//! token format sits behind it, so resolver tests can substitute a mock.

use async_trait::async_trait;

use crate::domain::{AuthToken, DomainError, LoginCredentials, Registration, User};

/// Domain use-case port for user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccounts: Send + Sync {
    /// All registered users.
    async fn list_users(&self) -> Result<Vec<User>, DomainError>;

    /// Create an account, failing with `already_exists` on a taken email.
    async fn register(&self, registration: Registration) -> Result<User, DomainError>;

    /// Authenticate and issue a token.
    ///
    /// Unknown emails fail with `not_found`; a wrong password fails with
    /// `invalid_credentials`.
    async fn login(&self, credentials: LoginCredentials) -> Result<AuthToken, DomainError>;
}
