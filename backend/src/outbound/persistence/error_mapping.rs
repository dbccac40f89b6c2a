//! Shared MongoDB error classification for the repositories.

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};
use tracing::debug;

/// Server error code for a unique-index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Whether the failure is a unique-index violation.
pub(super) fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(failure)) => failure.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(failure) => failure.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

fn is_connection_failure(error: &MongoError) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::ServerSelection { .. }
            | ErrorKind::Io(_)
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::Authentication { .. }
    )
}

/// Map driver failures into a repository's connection/query constructors.
///
/// Duplicate keys are not handled here; callers check
/// [`is_duplicate_key`] first because only they know the offending email.
pub(super) fn map_mongo_error<E, Q, C>(error: &MongoError, query: Q, connection: C) -> E
where
    Q: FnOnce(String) -> E,
    C: FnOnce(String) -> E,
{
    debug!(error = %error, "MongoDB operation failed");
    if is_connection_failure(error) {
        connection("database connection error".to_owned())
    } else {
        query(format!("database error: {error}"))
    }
}
