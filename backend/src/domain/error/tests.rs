//! Tests for domain error construction, codes, and redaction.

use super::*;
use rstest::rstest;
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[rstest]
#[case(DomainError::validation("bad"), ErrorCode::ValidationError)]
#[case(DomainError::invalid_credentials("nope"), ErrorCode::InvalidCredentials)]
#[case(DomainError::not_found("missing"), ErrorCode::NotFound)]
#[case(DomainError::already_exists("dup"), ErrorCode::AlreadyExists)]
#[case(DomainError::service_unavailable("down"), ErrorCode::ServiceUnavailable)]
#[case(DomainError::internal("boom"), ErrorCode::InternalError)]
fn constructors_set_code(#[case] error: DomainError, #[case] expected: ErrorCode) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case(ErrorCode::ValidationError)]
#[case(ErrorCode::InvalidCredentials)]
#[case(ErrorCode::NotFound)]
#[case(ErrorCode::AlreadyExists)]
#[case(ErrorCode::ServiceUnavailable)]
#[case(ErrorCode::InternalError)]
fn wire_name_matches_serde_representation(#[case] code: ErrorCode) {
    let serialised = serde_json::to_value(code).expect("serialise code");
    assert_eq!(serialised, json!(code.as_str()));
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let error = TraceId::scope(trace_id, async { DomainError::not_found("missing") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn new_has_no_trace_id_out_of_scope() {
    assert!(DomainError::internal("boom").trace_id().is_none());
}

#[rstest]
fn redacted_hides_internal_message_and_details() {
    let error = DomainError::internal("connection string leaked")
        .with_trace_id(TRACE_ID)
        .with_details(json!({ "secret": "x" }));

    let redacted = error.redacted();

    assert_eq!(redacted.code(), ErrorCode::InternalError);
    assert_eq!(redacted.message(), "Internal server error");
    assert!(redacted.details().is_none());
    assert_eq!(redacted.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn redacted_keeps_client_errors_intact() {
    let error = DomainError::already_exists("employee already exists")
        .with_details(json!({ "field": "email" }));

    assert_eq!(error.redacted(), error);
}
