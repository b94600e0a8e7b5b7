//! Quote list state.
//!
//! Visibility is the backend's decision; the list shows whatever `/quotes`
//! returns for this session.

#[cfg(test)]
#[path = "quotes_test.rs"]
mod quotes_test;

use crate::net::decode::SoftList;
use crate::net::error::ApiError;
use crate::net::types::Quote;

pub const QUOTES_LOAD_FAILED: &str = "Failed to load quotes.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuotesState {
    pub items: Vec<Quote>,
    pub loading: bool,
    pub error: Option<String>,
}

impl QuotesState {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply `GET /quotes`. A malformed payload still shows whatever decoded,
    /// alongside the notice.
    pub fn apply(&mut self, result: Result<SoftList<Quote>, ApiError>) {
        self.loading = false;
        match result {
            Ok(list) => {
                self.error = list.malformed.then(|| QUOTES_LOAD_FAILED.to_owned());
                self.items = list.items;
            }
            Err(_) => {
                self.items.clear();
                self.error = Some(QUOTES_LOAD_FAILED.to_owned());
            }
        }
    }
}
