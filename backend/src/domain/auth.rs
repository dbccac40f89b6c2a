//! Login credentials and issued access tokens.
//!
//! Inbound adapters build [`LoginCredentials`] from raw strings before
//! talking to the accounts service; the service answers with an
//! [`AuthToken`] minted by the configured token issuer.

use std::fmt;

use chrono::{DateTime, Utc};
use zeroize::Zeroizing;

use super::email::{Email, EmailValidationError};
use super::user::UserId;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was blank or malformed.
    InvalidEmail(EmailValidationError),
    /// Password was blank.
    EmptyPassword,
}

impl LoginValidationError {
    /// Name of the input field the error refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidEmail(_) => "email",
            Self::EmptyPassword => "password",
        }
    }
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEmail(err) => err.fmt(f),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials used by the accounts service.
///
/// ## Invariants
/// - `email` satisfies the [`Email`] invariants.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace to avoid surprising credential comparisons.
///
/// # Examples
/// ```
/// use employee_directory::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" ann@x.com", "s3cret").unwrap();
/// assert_eq!(creds.email().as_ref(), "ann@x.com");
/// assert_eq!(creds.password(), "s3cret");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: Email,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, LoginValidationError> {
        let email = Email::new(email).map_err(LoginValidationError::InvalidEmail)?;

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Email used for the account lookup.
    #[must_use]
    pub const fn email(&self) -> &Email {
        &self.email
    }

    /// Password string provided by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Signed access token handed back after a successful login.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken {
    user_id: UserId,
    token: String,
    expires_at: DateTime<Utc>,
}

impl AuthToken {
    /// Wrap a signed token and its expiry.
    #[must_use]
    pub fn new(user_id: UserId, token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            user_id,
            token: token.into(),
            expires_at,
        }
    }

    /// Account the token was issued for.
    #[must_use]
    pub const fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Encoded bearer token.
    #[must_use]
    pub fn token(&self) -> &str {
        self.token.as_str()
    }

    /// Instant after which the token is no longer valid.
    #[must_use]
    pub const fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken")
            .field("user_id", &self.user_id)
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
