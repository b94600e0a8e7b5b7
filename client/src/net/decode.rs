//! Contract validation for REST responses.
//!
//! DESIGN
//! ======
//! Transport code reduces every response to a `RawResponse` (status + body
//! text). All shape checks happen here, so pages receive either a typed value
//! or an `ApiError`, and collection endpoints fail soft into an empty list with
//! a flag instead of an error.

#[cfg(test)]
#[path = "decode_test.rs"]
mod decode_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ApiError;

/// Status code and body text of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Accepted top-level shapes for a collection endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListShape {
    /// Only a bare JSON array.
    Bare,
    /// A bare array or an object exposing a `data` array.
    BareOrEnveloped,
}

/// Collection decoded leniently: unusable payloads become empty.
#[derive(Clone, Debug, PartialEq)]
pub struct SoftList<T> {
    pub items: Vec<T>,
    /// Set when the payload (or any element) did not match the contract.
    pub malformed: bool,
}

impl<T> SoftList<T> {
    fn empty_malformed() -> Self {
        Self { items: Vec::new(), malformed: true }
    }
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Error for a non-success response, using the best message available.
    pub fn failure(&self) -> ApiError {
        ApiError::Status { status: self.status, message: failure_message(self.status, &self.body) }
    }

    /// Succeed on any 2xx regardless of body.
    pub fn empty(&self) -> Result<(), ApiError> {
        if self.is_success() { Ok(()) } else { Err(self.failure()) }
    }

    /// Decode a single entity from a 2xx body.
    pub fn entity<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.empty()?;
        serde_json::from_str(&self.body).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    /// Extract the numeric `id` of a freshly created record.
    pub fn created_id(&self) -> Result<i64, ApiError> {
        self.empty()?;
        let value: Value = serde_json::from_str(&self.body).map_err(|e| ApiError::Malformed(e.to_string()))?;
        value
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(|| ApiError::Malformed("response has no numeric id".to_owned()))
    }

    /// Decode a collection; only a non-success status is an error.
    pub fn list<T: DeserializeOwned>(&self, shape: ListShape) -> Result<SoftList<T>, ApiError> {
        self.empty()?;
        let Ok(value) = serde_json::from_str::<Value>(&self.body) else {
            return Ok(SoftList::empty_malformed());
        };
        Ok(soft_list(value, shape))
    }
}

/// Normalize an already-parsed collection payload.
pub fn soft_list<T: DeserializeOwned>(value: Value, shape: ListShape) -> SoftList<T> {
    let array = match (value, shape) {
        (Value::Array(items), _) => items,
        (Value::Object(mut map), ListShape::BareOrEnveloped) => match map.remove("data") {
            Some(Value::Array(items)) => items,
            _ => return SoftList::empty_malformed(),
        },
        _ => return SoftList::empty_malformed(),
    };

    let total = array.len();
    let items: Vec<T> = array
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();
    let malformed = items.len() != total;
    SoftList { items, malformed }
}

/// Message for a failed response: `error` field, then raw text, then the status.
pub fn failure_message(status: u16, body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(error)) = map.get("error") {
            if !error.trim().is_empty() {
                return error.clone();
            }
        }
    }
    let text = body.trim();
    if text.is_empty() { format!("HTTP {status}") } else { text.to_owned() }
}
