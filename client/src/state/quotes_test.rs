use super::*;
use crate::net::decode::{ListShape, RawResponse};

fn apply_body(body: &str) -> QuotesState {
    let mut state = QuotesState::default();
    state.begin();
    state.apply(RawResponse::new(200, body).list(ListShape::BareOrEnveloped));
    state
}

#[test]
fn bare_array_populates_list() {
    let state = apply_body(r#"[{"id":1,"title":"A","status":"Confirmed","user_id":9}]"#);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.error, None);
    assert!(!state.loading);
}

#[test]
fn envelope_populates_list() {
    let state = apply_body(r#"{"data":[{"id":1,"title":"A"},{"id":2,"title":"B"}]}"#);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.error, None);
}

#[test]
fn null_payload_shows_notice_and_empty_list() {
    let state = apply_body("null");
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some(QUOTES_LOAD_FAILED));
}

#[test]
fn request_failure_shows_notice_and_clears_items() {
    let mut state = apply_body(r#"[{"id":1,"title":"A"}]"#);
    state.begin();
    state.apply(Err(ApiError::Network("offline".to_owned())));
    assert!(state.items.is_empty());
    assert_eq!(state.error.as_deref(), Some(QUOTES_LOAD_FAILED));
}

#[test]
fn null_status_entry_is_kept() {
    let state = apply_body(r#"[{"id":1,"title":"A","status":null,"user_id":1}]"#);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].status, "");
    assert_eq!(state.error, None);
}
