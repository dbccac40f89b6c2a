//! User account service.
//!
//! Implements the [`UserAccounts`] driving port on top of a user repository,
//! a credential hasher, and a token issuer.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use serde_json::json;
use tracing::{debug, info};

use crate::domain::ports::{
    CredentialHasher, CredentialHasherError, TokenIssuer, TokenIssuerError, UserAccounts,
    UserPersistenceError, UserRepository,
};
use crate::domain::{AuthToken, DomainError, Email, LoginCredentials, Registration, User};

/// Account service implementing the [`UserAccounts`] port.
#[derive(Clone)]
pub struct AccountService<R, H, T> {
    users: Arc<R>,
    hasher: Arc<H>,
    tokens: Arc<T>,
    clock: Arc<dyn Clock>,
}

impl<R, H, T> AccountService<R, H, T> {
    /// Create a new service from its collaborators.
    #[must_use]
    pub const fn new(users: Arc<R>, hasher: Arc<H>, tokens: Arc<T>, clock: Arc<dyn Clock>) -> Self {
        Self {
            users,
            hasher,
            tokens,
            clock,
        }
    }
}

fn duplicate_email(email: &str) -> DomainError {
    DomainError::already_exists("user already exists").with_details(json!({
        "field": "email",
        "email": email,
    }))
}

pub(crate) fn map_user_persistence_error(error: UserPersistenceError) -> DomainError {
    match error {
        UserPersistenceError::Connection { message } => {
            DomainError::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            DomainError::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::Duplicate { email } => duplicate_email(&email),
    }
}

fn map_hasher_error(error: CredentialHasherError) -> DomainError {
    DomainError::internal(error.to_string())
}

fn map_token_error(error: TokenIssuerError) -> DomainError {
    DomainError::internal(error.to_string())
}

impl<R, H, T> AccountService<R, H, T>
where
    R: UserRepository,
{
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        self.users
            .find_by_email(email)
            .await
            .map_err(map_user_persistence_error)
    }
}

#[async_trait]
impl<R, H, T> UserAccounts for AccountService<R, H, T>
where
    R: UserRepository,
    H: CredentialHasher,
    T: TokenIssuer,
{
    async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        self.users.list().await.map_err(map_user_persistence_error)
    }

    async fn register(&self, registration: Registration) -> Result<User, DomainError> {
        // Fail before paying for a hash; the unique index still backs this up.
        if self.find_by_email(registration.email()).await?.is_some() {
            return Err(duplicate_email(registration.email().as_ref()));
        }

        let hash = self
            .hasher
            .hash(registration.password())
            .await
            .map_err(map_hasher_error)?;
        let record = registration.into_new_user(hash);
        let user = self
            .users
            .insert(&record)
            .await
            .map_err(map_user_persistence_error)?;

        info!(user_id = %user.id(), "user registered");
        Ok(user)
    }

    async fn login(&self, credentials: LoginCredentials) -> Result<AuthToken, DomainError> {
        let Some(user) = self.find_by_email(credentials.email()).await? else {
            debug!("login rejected: unknown email");
            return Err(DomainError::not_found("user does not exist"));
        };

        let matches = self
            .hasher
            .verify(credentials.password(), user.password_hash())
            .await
            .map_err(map_hasher_error)?;
        if !matches {
            debug!(user_id = %user.id(), "login rejected: password mismatch");
            return Err(DomainError::invalid_credentials("password is incorrect"));
        }

        self.tokens
            .issue(user.id(), user.email(), self.clock.utc())
            .map_err(map_token_error)
    }
}

#[cfg(test)]
#[path = "account_service_tests.rs"]
mod tests;
