//! GraphQL adapter mapping for domain errors.
//!
//! Purpose: keep the domain error type transport-agnostic while giving
//! resolvers a single conversion into `async_graphql::Error` with a stable
//! `extensions` payload: `code`, `traceId`, and optional `details`.

use async_graphql::{ErrorExtensions, Value};
use tracing::{error, warn};

use crate::domain::{DomainError, ErrorCode};

impl ErrorExtensions for DomainError {
    fn extend(&self) -> async_graphql::Error {
        if self.code() == ErrorCode::InternalError {
            error!(
                error_message = self.message(),
                trace_id = self.trace_id().unwrap_or_default(),
                "internal error returned to client"
            );
        }
        let safe = self.redacted();
        async_graphql::Error::new(safe.message()).extend_with(|_, extensions| {
            extensions.set("code", safe.code().as_str().to_owned());
            if let Some(trace_id) = safe.trace_id() {
                extensions.set("traceId", trace_id.to_owned());
            }
            if let Some(details) = safe.details() {
                match Value::from_json(details.clone()) {
                    Ok(value) => extensions.set("details", value),
                    Err(err) => warn!(error = %err, "dropping unrepresentable error details"),
                }
            }
        })
    }
}

/// Resolver result alias used by the query and mutation roots.
pub type GqlResult<T> = async_graphql::Result<T>;

/// Convert a domain result into a resolver result.
pub(super) fn to_gql<T>(result: Result<T, DomainError>) -> GqlResult<T> {
    result.map_err(|err| err.extend())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn string(value: &str) -> Value {
        Value::String(value.to_owned())
    }

    #[rstest]
    fn carries_code_trace_and_details() {
        let err = DomainError::already_exists("employee already exists")
            .with_trace_id("00000000-0000-0000-0000-000000000000")
            .with_details(json!({ "field": "email" }))
            .extend();

        assert_eq!(err.message, "employee already exists");
        let extensions = err.extensions.as_ref().expect("extensions set");
        assert_eq!(extensions.get("code"), Some(&string("already_exists")));
        assert_eq!(
            extensions.get("traceId"),
            Some(&string("00000000-0000-0000-0000-000000000000"))
        );
        let details = Value::from_json(json!({ "field": "email" })).expect("json value");
        assert_eq!(extensions.get("details"), Some(&details));
    }

    #[rstest]
    fn internal_errors_are_redacted() {
        let err = DomainError::internal("mongodb://root:pw@db refused")
            .with_details(json!({ "uri": "mongodb://root:pw@db" }))
            .extend();

        assert_eq!(err.message, "Internal server error");
        let extensions = err.extensions.as_ref().expect("extensions set");
        assert_eq!(extensions.get("code"), Some(&string("internal_error")));
        assert!(extensions.get("details").is_none());
    }
}
