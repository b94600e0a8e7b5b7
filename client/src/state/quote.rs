//! Single-quote view and owner edit/delete state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Backs the `/quotes/:id` route. Ownership (`session user id == user_id`) is
//! advisory here; the backend re-checks it on PATCH and DELETE.
//!
//! DESIGN
//! ======
//! After a save the server's representation replaces local state wholesale.
//! A delete only counts once the backend confirms it; a rejected delete keeps
//! the page and shows the failure.

#[cfg(test)]
#[path = "quote_test.rs"]
mod quote_test;

use crate::net::error::ApiError;
use crate::net::types::{Quote, QuotePatch};
use crate::util::auth::is_owner;

pub const QUOTE_LOAD_FAILED: &str = "Failed to load quote.";
pub const QUOTE_NOT_FOUND: &str = "Quote not found.";

/// Status values seen across backend revisions. Offered as suggestions only;
/// the backend decides which ones it accepts.
pub const KNOWN_STATUSES: &[&str] = &["Confirmed", "Accepted", "draft", "published"];

#[derive(Clone, Debug, Default, PartialEq)]
pub enum QuoteLoad {
    #[default]
    Loading,
    Loaded(Quote),
    NotFound,
    Failed(String),
}

/// Editable copy of the mutable quote fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuoteEditForm {
    pub title: String,
    pub status: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuoteDetailState {
    pub load: QuoteLoad,
    pub form: QuoteEditForm,
    pub saving: bool,
    pub deleting: bool,
    /// Inline result of the last save/delete attempt.
    pub notice: Option<String>,
}

impl QuoteDetailState {
    pub fn quote(&self) -> Option<&Quote> {
        match &self.load {
            QuoteLoad::Loaded(quote) => Some(quote),
            _ => None,
        }
    }

    /// Apply the result of `GET /quotes/:id`.
    pub fn load_finished(&mut self, result: Result<Quote, ApiError>) {
        self.notice = None;
        match result {
            Ok(quote) => self.replace(quote),
            Err(e) if e.is_not_found() => self.load = QuoteLoad::NotFound,
            Err(e) => self.load = QuoteLoad::Failed(load_failure_message(&e)),
        }
    }

    fn replace(&mut self, quote: Quote) {
        self.form = QuoteEditForm { title: quote.title.clone(), status: quote.status.clone() };
        self.load = QuoteLoad::Loaded(quote);
    }

    /// Whether the session user may edit and delete this quote.
    pub fn can_manage(&self, session_user_id: Option<i64>) -> bool {
        self.quote().is_some_and(|q| is_owner(session_user_id, q.user_id))
    }

    /// Changed fields only; `None` when nothing differs from the loaded quote.
    pub fn patch(&self) -> Option<QuotePatch> {
        let quote = self.quote()?;
        let title = self.form.title.trim();
        let patch = QuotePatch {
            title: (!title.is_empty() && title != quote.title).then(|| title.to_owned()),
            status: (self.form.status != quote.status).then(|| self.form.status.clone()),
        };
        (!patch.is_empty()).then_some(patch)
    }

    /// Start a save for the owner; returns the PATCH body to send.
    pub fn begin_save(&mut self, session_user_id: Option<i64>) -> Option<QuotePatch> {
        if self.saving || self.deleting || !self.can_manage(session_user_id) {
            return None;
        }
        let Some(patch) = self.patch() else {
            self.notice = Some("Nothing to save.".to_owned());
            return None;
        };
        self.saving = true;
        self.notice = None;
        Some(patch)
    }

    pub fn save_finished(&mut self, result: Result<Quote, ApiError>) {
        self.saving = false;
        match result {
            Ok(quote) => {
                self.replace(quote);
                self.notice = Some("Saved.".to_owned());
            }
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    /// Start a delete for the owner; returns the quote id to delete.
    pub fn begin_delete(&mut self, session_user_id: Option<i64>) -> Option<i64> {
        if self.saving || self.deleting || !self.can_manage(session_user_id) {
            return None;
        }
        self.deleting = true;
        self.notice = None;
        self.quote().map(|q| q.id)
    }

    /// Record the delete outcome; returns `true` when the page should leave.
    pub fn delete_finished(&mut self, result: Result<(), ApiError>) -> bool {
        self.deleting = false;
        match result {
            Ok(()) => true,
            Err(e) => {
                self.notice = Some(format!("Delete failed: {e}"));
                false
            }
        }
    }
}

fn load_failure_message(error: &ApiError) -> String {
    match error {
        ApiError::Status { .. } | ApiError::Malformed(_) => QUOTE_LOAD_FAILED.to_owned(),
        other => other.to_string(),
    }
}

/// Suggestions for the status field: the current value first, then the known
/// statuses without duplicates.
pub fn status_options(current: &str) -> Vec<String> {
    let mut options: Vec<String> = Vec::new();
    let current = current.trim();
    if !current.is_empty() {
        options.push(current.to_owned());
    }
    for status in KNOWN_STATUSES {
        if !options.iter().any(|o| o.eq_ignore_ascii_case(status)) {
            options.push((*status).to_owned());
        }
    }
    options
}

/// Parse the `:id` route segment.
pub fn parse_quote_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

impl QuoteLoad {
    /// Notice text for non-loaded states.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Loading => Some("Loading…"),
            Self::Loaded(_) => None,
            Self::NotFound => Some(QUOTE_NOT_FOUND),
            Self::Failed(message) => Some(message),
        }
    }
}
