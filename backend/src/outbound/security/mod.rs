//! Credential hashing and token signing adapters.

mod argon2_hasher;
mod jwt_issuer;

pub use argon2_hasher::Argon2Hasher;
pub use jwt_issuer::{
    Claims, JwtIssuer, MIN_SECRET_LEN, SigningSecret, SigningSecretError, TOKEN_TTL_SECS,
};
