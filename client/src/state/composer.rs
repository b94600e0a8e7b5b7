//! Quote composer: form state, client-side validation and submit lifecycle.
//!
//! DESIGN
//! ======
//! Phases run `Idle -> Validating -> Submitting -> {Success, Failed}`. A failed
//! submit keeps every field so the user can correct and resubmit. Validation
//! here covers required fields only; rate/pair/type consistency is the
//! backend's call.
//!
//! Whenever the displayed rate set changes, the selected rate ids are pruned
//! to the ids still on screen so an old selection cannot ride along silently.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use std::collections::BTreeSet;

use crate::net::error::ApiError;
use crate::net::types::{NewQuote, Rate};
use crate::state::rates::{RateQuery, RateQueryState};

pub const REQUIRED: &str = "Required";
pub const CHOOSE_RATE: &str = "Choose at least one rate";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ComposerPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success {
        quote_id: i64,
    },
    Failed {
        message: String,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerForm {
    pub title: String,
    pub port_pair_id: Option<i64>,
    pub container_type_id: Option<i64>,
    pub rate_ids: BTreeSet<i64>,
}

/// Per-field validation messages; `None` means the field is fine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerErrors {
    pub title: Option<&'static str>,
    pub port_pair_id: Option<&'static str>,
    pub container_type_id: Option<&'static str>,
    pub rate_ids: Option<&'static str>,
}

impl ComposerErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.port_pair_id.is_none()
            && self.container_type_id.is_none()
            && self.rate_ids.is_none()
    }
}

/// Check required fields and build the create body.
///
/// # Errors
///
/// Returns the per-field messages when any required field is missing.
pub fn validate(form: &ComposerForm) -> Result<NewQuote, ComposerErrors> {
    let title = form.title.trim();
    let errors = ComposerErrors {
        title: title.is_empty().then_some(REQUIRED),
        port_pair_id: form.port_pair_id.is_none().then_some(REQUIRED),
        container_type_id: form.container_type_id.is_none().then_some(REQUIRED),
        rate_ids: form.rate_ids.is_empty().then_some(CHOOSE_RATE),
    };
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(NewQuote { title: title.to_owned(), rate_ids: form.rate_ids.iter().copied().collect() })
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComposerState {
    pub form: ComposerForm,
    pub phase: ComposerPhase,
    pub errors: ComposerErrors,
    pub rates: RateQueryState,
}

impl ComposerState {
    pub fn set_title(&mut self, title: String) {
        self.form.title = title;
    }

    /// Change the port pair; returns the rate query to issue, if any.
    pub fn select_port_pair(&mut self, port_pair_id: Option<i64>) -> Option<RateQuery> {
        self.form.port_pair_id = port_pair_id;
        self.reselect()
    }

    /// Change the container type; returns the rate query to issue, if any.
    pub fn select_container_type(&mut self, container_type_id: Option<i64>) -> Option<RateQuery> {
        self.form.container_type_id = container_type_id;
        self.reselect()
    }

    fn reselect(&mut self) -> Option<RateQuery> {
        let query = self.rates.select(self.form.port_pair_id, self.form.container_type_id);
        self.prune_selection();
        query
    }

    /// Apply a rate response; stale tickets are ignored.
    pub fn apply_rates(&mut self, query: &RateQuery, result: Result<Vec<Rate>, String>) -> bool {
        let applied = self.rates.apply(query, result);
        if applied {
            self.prune_selection();
        }
        applied
    }

    fn prune_selection(&mut self) {
        let rates = &self.rates;
        self.form.rate_ids.retain(|id| rates.contains(*id));
    }

    /// Select or deselect a displayed rate. Ids not on screen are ignored.
    pub fn toggle_rate(&mut self, rate_id: i64) {
        if !self.form.rate_ids.remove(&rate_id) && self.rates.contains(rate_id) {
            self.form.rate_ids.insert(rate_id);
        }
    }

    pub fn is_selected(&self, rate_id: i64) -> bool {
        self.form.rate_ids.contains(&rate_id)
    }

    /// Validate and move to `Submitting`.
    ///
    /// Returns the body to POST, or `None` when validation failed or a submit
    /// is already in flight or done. Validation failures return to `Idle`
    /// without contacting the backend.
    pub fn begin_submit(&mut self) -> Option<NewQuote> {
        if self.is_busy() || self.is_done() {
            return None;
        }
        self.phase = ComposerPhase::Validating;
        match validate(&self.form) {
            Ok(body) => {
                self.errors = ComposerErrors::default();
                self.phase = ComposerPhase::Submitting;
                Some(body)
            }
            Err(errors) => {
                self.errors = errors;
                self.phase = ComposerPhase::Idle;
                None
            }
        }
    }

    /// Record the create outcome. The form is never reset here.
    pub fn finish_submit(&mut self, result: Result<i64, ApiError>) {
        self.phase = match result {
            Ok(quote_id) => ComposerPhase::Success { quote_id },
            Err(e) => ComposerPhase::Failed { message: e.to_string() },
        };
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, ComposerPhase::Validating | ComposerPhase::Submitting)
    }

    pub fn is_done(&self) -> bool {
        matches!(self.phase, ComposerPhase::Success { .. })
    }

    pub fn failure(&self) -> Option<&str> {
        match &self.phase {
            ComposerPhase::Failed { message } => Some(message),
            _ => None,
        }
    }
}
