//! Port for minting signed access tokens.

use chrono::{DateTime, Utc};

use crate::domain::{AuthToken, Email, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by token issuers.
    pub enum TokenIssuerError {
        /// The signing backend rejected the claims or key.
        Signing { message: String } => "token signing failed: {message}",
    }
}

/// Issues tokens bound to a user identity.
#[cfg_attr(test, mockall::automock)]
pub trait TokenIssuer: Send + Sync {
    /// Sign a token for `user_id` that is valid from `issued_at`.
    fn issue(
        &self,
        user_id: &UserId,
        email: &Email,
        issued_at: DateTime<Utc>,
    ) -> Result<AuthToken, TokenIssuerError>;
}
