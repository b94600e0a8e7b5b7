//! Admin lookup-data form validation and submit status.
//!
//! DESIGN
//! ======
//! Validators trim and normalize raw input into the request body or return
//! the inline message for the first problem found. Deeper rules (unique
//! codes, origin != destination) belong to the backend.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::error::ApiError;
use crate::net::types::{NewContainerType, NewPort, NewPortPair, NewRate};

pub const CREATED: &str = "Created!";

/// Submit status shared by the admin create forms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub submitting: bool,
    pub message: Option<String>,
    pub succeeded: bool,
}

impl FormStatus {
    /// Mark a submit as started; `false` when one is already running.
    pub fn begin(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.message = None;
        self.succeeded = false;
        true
    }

    pub fn invalid(&mut self, message: &str) {
        self.submitting = false;
        self.succeeded = false;
        self.message = Some(message.to_owned());
    }

    /// Record the create outcome; `true` means the caller should reset its fields.
    pub fn finish<T>(&mut self, result: &Result<T, ApiError>) -> bool {
        self.submitting = false;
        match result {
            Ok(_) => {
                self.succeeded = true;
                self.message = Some(CREATED.to_owned());
                true
            }
            Err(e) => {
                self.succeeded = false;
                self.message = Some(e.to_string());
                false
            }
        }
    }
}

/// Name required; code must be a five-character UN/LOCODE (upper-cased here).
///
/// # Errors
///
/// Returns the inline message for the first invalid field.
pub fn validate_port(name: &str, code: &str) -> Result<NewPort, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Port name is required.");
    }
    let code = code.trim().to_ascii_uppercase();
    if code.len() != 5 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err("5-char UN/LOCODE expected.");
    }
    Ok(NewPort { name: name.to_owned(), code })
}

/// # Errors
///
/// Returns the inline message when the code is blank.
pub fn validate_container_type(code: &str, description: &str) -> Result<NewContainerType, &'static str> {
    let code = code.trim();
    if code.is_empty() {
        return Err("Container code is required.");
    }
    let description = description.trim();
    Ok(NewContainerType {
        code: code.to_owned(),
        description: (!description.is_empty()).then(|| description.to_owned()),
    })
}

/// # Errors
///
/// Returns the inline message when either port is unselected.
pub fn validate_port_pair(origin: Option<i64>, destination: Option<i64>) -> Result<NewPortPair, &'static str> {
    match (origin, destination) {
        (Some(origin_port_id), Some(destination_port_id)) => Ok(NewPortPair { origin_port_id, destination_port_id }),
        _ => Err("Choose both an origin and a destination port."),
    }
}

/// # Errors
///
/// Returns the inline message for a missing selector or an out-of-range number.
pub fn validate_rate(
    port_pair_id: Option<i64>,
    container_type_id: Option<i64>,
    transit_days: &str,
    base_rate: &str,
) -> Result<NewRate, &'static str> {
    let (Some(port_pair_id), Some(container_type_id)) = (port_pair_id, container_type_id) else {
        return Err("Choose a port pair and a container type.");
    };
    let transit_days = transit_days
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|d| *d >= 1)
        .ok_or("Transit days must be a whole number of at least 1.")?;
    let base_rate = base_rate
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|r| r.is_finite() && *r >= 1.0)
        .ok_or("Base rate must be at least 1.")?;
    Ok(NewRate { port_pair_id, container_type_id, transit_days, base_rate })
}

/// Raw input of the rate form, kept as typed so a failed submit loses nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RateDraft {
    pub port_pair: String,
    pub container_type: String,
    pub transit_days: String,
    pub base_rate: String,
}

impl RateDraft {
    /// # Errors
    ///
    /// Returns the inline message from `validate_rate`.
    pub fn validate(&self) -> Result<NewRate, &'static str> {
        validate_rate(
            parse_selection(&self.port_pair),
            parse_selection(&self.container_type),
            &self.transit_days,
            &self.base_rate,
        )
    }

    /// Reset every field, selectors included, after a successful create.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Parse a `<select>` value; the empty placeholder option maps to `None`.
pub fn parse_selection(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}
