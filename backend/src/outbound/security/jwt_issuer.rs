//! HS256 JWT implementation of the `TokenIssuer` port.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::domain::ports::{TokenIssuer, TokenIssuerError};
use crate::domain::{AuthToken, Email, UserId};

/// Minimum accepted signing-secret length in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Lifetime of issued tokens.
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Errors raised when constructing a [`SigningSecret`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SigningSecretError {
    /// Fewer bytes than HS256 needs.
    #[error("signing secret must be at least {min} bytes, got {actual}")]
    TooShort {
        /// Required length in bytes.
        min: usize,
        /// Supplied length in bytes.
        actual: usize,
    },
}

/// HMAC key material, zeroed on drop.
#[derive(Clone)]
pub struct SigningSecret(Zeroizing<Vec<u8>>);

impl SigningSecret {
    /// Accept a secret of at least [`MIN_SECRET_LEN`] bytes.
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, SigningSecretError> {
        let bytes = secret.as_ref();
        if bytes.len() < MIN_SECRET_LEN {
            return Err(SigningSecretError::TooShort {
                min: MIN_SECRET_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self(Zeroizing::new(bytes.to_vec())))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_slice()
    }
}

impl fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningSecret(<redacted>)")
    }
}

/// Claims carried by issued tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier.
    pub sub: String,
    /// Account email at issue time.
    pub email: String,
    /// Issued-at, Unix seconds.
    pub iat: i64,
    /// Expiry, Unix seconds.
    pub exp: i64,
}

/// Signs HS256 tokens valid for [`TOKEN_TTL_SECS`].
#[derive(Clone)]
pub struct JwtIssuer {
    key: EncodingKey,
    ttl: Duration,
}

impl JwtIssuer {
    /// Issuer signing with `secret`.
    #[must_use]
    pub fn new(secret: &SigningSecret) -> Self {
        Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(TOKEN_TTL_SECS),
        }
    }
}

impl fmt::Debug for JwtIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtIssuer")
            .field("key", &"<redacted>")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenIssuer for JwtIssuer {
    fn issue(
        &self,
        user_id: &UserId,
        email: &Email,
        issued_at: DateTime<Utc>,
    ) -> Result<AuthToken, TokenIssuerError> {
        let expires_at = issued_at + self.ttl;
        let claims = Claims {
            sub: user_id.as_ref().to_owned(),
            email: email.as_ref().to_owned(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.key)
            .map_err(|err| TokenIssuerError::signing(err.to_string()))?;
        Ok(AuthToken::new(user_id.clone(), token, expires_at))
    }
}
