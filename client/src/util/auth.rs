//! Shared session-gating helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes render a prompt instead of redirecting when nobody is signed in, so
//! every page applies the same gate text and the same ownership rule.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::auth::AuthState;

/// Client-side ownership check: the session user id equals the record owner.
/// Advisory only; the backend enforces it again.
pub fn is_owner(session_user_id: Option<i64>, owner_id: Option<i64>) -> bool {
    matches!((session_user_id, owner_id), (Some(me), Some(owner)) if me == owner)
}

/// Text to show instead of a signed-in view, or `None` when a user is present.
pub fn session_gate<'a>(state: &AuthState, prompt: &'a str) -> Option<&'a str> {
    if state.loading {
        Some("Loading…")
    } else if state.user.is_none() {
        Some(prompt)
    } else {
        None
    }
}
