use super::*;
use crate::net::types::{Port, Quote, User};

// =============================================================
// failure_message
// =============================================================

#[test]
fn failure_message_prefers_structured_error() {
    assert_eq!(failure_message(401, r#"{"error":"invalid login"}"#), "invalid login");
}

#[test]
fn failure_message_falls_back_to_raw_text() {
    assert_eq!(failure_message(502, "  Bad Gateway \n"), "Bad Gateway");
}

#[test]
fn failure_message_uses_raw_json_when_error_field_missing() {
    assert_eq!(failure_message(400, r#"{"message":"nope"}"#), r#"{"message":"nope"}"#);
}

#[test]
fn failure_message_uses_status_for_empty_body() {
    assert_eq!(failure_message(500, ""), "HTTP 500");
    assert_eq!(failure_message(403, "   "), "HTTP 403");
}

#[test]
fn failure_message_ignores_blank_error_field() {
    assert_eq!(failure_message(400, r#"{"error":""}"#), r#"{"error":""}"#);
}

// =============================================================
// entity / created_id / empty
// =============================================================

#[test]
fn entity_decodes_success_body() {
    let user: User = RawResponse::new(200, r#"{"id":1,"email":"a@b.com"}"#).entity().unwrap();
    assert_eq!(user.id, 1);
}

#[test]
fn entity_error_body_on_success_status_is_malformed() {
    let result = RawResponse::new(200, r#"{"error":"not logged in"}"#).entity::<User>();
    assert!(matches!(result, Err(ApiError::Malformed(_))));
}

#[test]
fn entity_non_success_carries_backend_message() {
    let result = RawResponse::new(401, r#"{"error":"not logged in"}"#).entity::<User>();
    assert_eq!(result, Err(ApiError::Status { status: 401, message: "not logged in".to_owned() }));
}

#[test]
fn created_id_reads_numeric_id() {
    let raw = RawResponse::new(201, r#"{"id":42,"title":"Acme","rate_ids":[7]}"#);
    assert_eq!(raw.created_id(), Ok(42));
}

#[test]
fn created_id_rejects_missing_or_string_id() {
    assert!(matches!(RawResponse::new(201, r#"{"title":"Acme"}"#).created_id(), Err(ApiError::Malformed(_))));
    assert!(matches!(RawResponse::new(201, r#"{"id":"42"}"#).created_id(), Err(ApiError::Malformed(_))));
    assert!(matches!(RawResponse::new(201, "").created_id(), Err(ApiError::Malformed(_))));
}

#[test]
fn empty_accepts_no_content() {
    assert_eq!(RawResponse::new(204, "").empty(), Ok(()));
}

#[test]
fn empty_rejects_forbidden() {
    assert_eq!(
        RawResponse::new(403, r#"{"error":"forbidden"}"#).empty(),
        Err(ApiError::Status { status: 403, message: "forbidden".to_owned() })
    );
}

// =============================================================
// list
// =============================================================

#[test]
fn list_decodes_bare_array() {
    let raw = RawResponse::new(200, r#"[{"id":1,"name":"Shanghai","code":"CNSHA"}]"#);
    let list: SoftList<Port> = raw.list(ListShape::Bare).unwrap();
    assert_eq!(list.items.len(), 1);
    assert!(!list.malformed);
}

#[test]
fn list_bare_shape_rejects_envelope() {
    let raw = RawResponse::new(200, r#"{"data":[]}"#);
    let list: SoftList<Port> = raw.list(ListShape::Bare).unwrap();
    assert!(list.items.is_empty());
    assert!(list.malformed);
}

#[test]
fn list_accepts_data_envelope_when_allowed() {
    let raw = RawResponse::new(200, r#"{"data":[{"id":1,"title":"A"},{"id":2,"title":"B"}]}"#);
    let list: SoftList<Quote> = raw.list(ListShape::BareOrEnveloped).unwrap();
    assert_eq!(list.items.iter().map(|q| q.id).collect::<Vec<_>>(), vec![1, 2]);
    assert!(!list.malformed);
}

#[test]
fn list_null_payload_is_empty_and_flagged() {
    let list: SoftList<Quote> = RawResponse::new(200, "null").list(ListShape::BareOrEnveloped).unwrap();
    assert!(list.items.is_empty());
    assert!(list.malformed);
}

#[test]
fn list_unparseable_body_is_empty_and_flagged() {
    let list: SoftList<Quote> = RawResponse::new(200, "<html>").list(ListShape::BareOrEnveloped).unwrap();
    assert!(list.items.is_empty());
    assert!(list.malformed);
}

#[test]
fn list_drops_bad_elements_and_flags() {
    let raw = RawResponse::new(200, r#"[{"id":1,"title":"A"},{"title":"no id"}]"#);
    let list: SoftList<Quote> = raw.list(ListShape::Bare).unwrap();
    assert_eq!(list.items.len(), 1);
    assert!(list.malformed);
}

#[test]
fn list_non_success_is_error() {
    let result = RawResponse::new(500, "").list::<Quote>(ListShape::Bare);
    assert_eq!(result, Err(ApiError::Status { status: 500, message: "HTTP 500".to_owned() }));
}
