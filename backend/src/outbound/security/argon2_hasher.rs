//! Argon2id implementation of the `CredentialHasher` port.
//!
//! Hashing is deliberately slow, so both operations run on Tokio's blocking
//! pool with the caller's trace identifier carried across.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    Error as PhcError, PasswordHash as PhcString, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use zeroize::Zeroizing;

use crate::domain::ports::{CredentialHasher, CredentialHasherError};
use crate::domain::{PasswordHash, TraceId};

/// Argon2id hasher producing PHC strings with a per-hash random salt.
///
/// # Examples
/// ```
/// use argon2::Params;
/// use employee_directory::outbound::security::Argon2Hasher;
///
/// let production = Argon2Hasher::default();
/// let cheap = Argon2Hasher::with_params(Params::new(8, 1, 1, None).unwrap());
/// # let _ = (production, cheap);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Hasher using custom work-factor parameters.
    #[must_use]
    pub fn with_params(params: Params) -> Self {
        Self { params }
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

async fn run_blocking<F, T>(work: F) -> Result<T, CredentialHasherError>
where
    F: FnOnce() -> Result<T, CredentialHasherError> + Send + 'static,
    T: Send + 'static,
{
    let trace_id = TraceId::current();
    tokio::task::spawn_blocking(move || match trace_id {
        Some(id) => TraceId::sync_scope(id, work),
        None => work(),
    })
    .await
    .map_err(|err| CredentialHasherError::hashing(format!("hashing task failed: {err}")))?
}

#[async_trait]
impl CredentialHasher for Argon2Hasher {
    async fn hash(&self, password: &str) -> Result<PasswordHash, CredentialHasherError> {
        let password = Zeroizing::new(password.to_owned());
        let argon2 = self.argon2();
        let encoded = run_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|err| CredentialHasherError::hashing(err.to_string()))
        })
        .await?;
        PasswordHash::new(encoded).map_err(|err| CredentialHasherError::hashing(err.to_string()))
    }

    async fn verify(
        &self,
        password: &str,
        hash: &PasswordHash,
    ) -> Result<bool, CredentialHasherError> {
        let password = Zeroizing::new(password.to_owned());
        let encoded = hash.as_ref().to_owned();
        let argon2 = self.argon2();
        run_blocking(move || {
            let parsed = PhcString::new(&encoded)
                .map_err(|err| CredentialHasherError::malformed_hash(err.to_string()))?;
            match argon2.verify_password(password.as_bytes(), &parsed) {
                Ok(()) => Ok(true),
                Err(PhcError::Password) => Ok(false),
                Err(err) => Err(CredentialHasherError::hashing(err.to_string())),
            }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn hasher() -> Argon2Hasher {
        Argon2Hasher::with_params(Params::new(8, 1, 1, None).expect("cheap params"))
    }

    #[rstest]
    #[tokio::test]
    async fn hash_produces_argon2id_phc_string(hasher: Argon2Hasher) {
        let hash = hasher.hash("s3cret").await.expect("hash ok");
        assert!(hash.as_ref().starts_with("$argon2id$v=19$"));
        assert!(!hash.as_ref().contains("s3cret"));
    }

    #[rstest]
    #[tokio::test]
    async fn hashes_are_salted(hasher: Argon2Hasher) {
        let first = hasher.hash("s3cret").await.expect("hash ok");
        let second = hasher.hash("s3cret").await.expect("hash ok");
        assert_ne!(first, second);
    }

    #[rstest]
    #[case("s3cret", true)]
    #[case("wrong", false)]
    #[case(" s3cret", false)]
    #[tokio::test]
    async fn verify_matches_only_original_password(
        hasher: Argon2Hasher,
        #[case] attempt: &str,
        #[case] expected: bool,
    ) {
        let hash = hasher.hash("s3cret").await.expect("hash ok");
        let matches = hasher.verify(attempt, &hash).await.expect("verify ok");
        assert_eq!(matches, expected);
    }

    #[rstest]
    #[tokio::test]
    async fn verify_rejects_malformed_hash(hasher: Argon2Hasher) {
        let hash = PasswordHash::new("plaintext-from-legacy-store").expect("non-empty");
        let err = hasher
            .verify("s3cret", &hash)
            .await
            .expect_err("malformed hash must fail");
        assert!(matches!(err, CredentialHasherError::MalformedHash { .. }));
    }
}
