//! Tests for domain error construction and serde contracts.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn duplicate_key_error() -> Error {
    Error::invalid_request("employee_id already exists")
        .with_details(json!({ "code": "duplicate_key", "field": "employee_id" }))
}

#[rstest]
fn constructors_set_codes() {
    assert_eq!(Error::invalid_request("bad").code(), ErrorCode::InvalidRequest);
    assert_eq!(Error::internal("boom").code(), ErrorCode::InternalError);
}

#[rstest]
fn blank_messages_fall_back_to_generic_text() {
    let err = Error::internal("   ");
    assert_eq!(err.message(), "unexpected error");
}

#[rstest]
fn try_new_rejects_blank_messages() {
    let result = Error::try_new(ErrorCode::InvalidRequest, " ");
    assert_eq!(result, Err(ErrorValidationError::EmptyMessage));
}

#[rstest]
fn new_has_no_trace_id_out_of_scope() {
    assert!(Error::internal("boom").trace_id().is_none());
}

#[tokio::test]
async fn new_captures_trace_id_in_scope() {
    let trace_id: TraceId = TRACE_ID.parse().expect("valid UUID");
    let error = TraceId::scope(trace_id, async { Error::internal("boom") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn serialises_camel_case_envelope(duplicate_key_error: Error) {
    let value = serde_json::to_value(duplicate_key_error.with_trace_id(TRACE_ID))
        .expect("error serialises");

    assert_eq!(value["code"], "invalid_request");
    assert_eq!(value["traceId"], TRACE_ID);
    assert_eq!(value["details"]["field"], "employee_id");
    assert!(value.get("trace_id").is_none());
}

#[rstest]
fn deserialising_rejects_blank_trace_id() {
    let payload = json!({ "code": "internal_error", "message": "boom", "traceId": "  " });
    let result = serde_json::from_value::<Error>(payload);
    assert!(result.is_err());
}

#[rstest]
fn deserialising_accepts_snake_case_trace_id_alias() {
    let payload = json!({ "code": "invalid_request", "message": "bad", "trace_id": TRACE_ID });
    let error: Error = serde_json::from_value(payload).expect("payload deserialises");
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}
