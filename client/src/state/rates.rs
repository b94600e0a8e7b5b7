//! Rate set lookup driven by the port pair and container type selectors.
//!
//! DESIGN
//! ======
//! Every selector change bumps `generation` and, when both ids are present,
//! yields a `RateQuery` ticket. Responses are applied only for the ticket that
//! is still current, so a slow earlier response can never overwrite the rates
//! for a later selection. No cancellation is needed.

#[cfg(test)]
#[path = "rates_test.rs"]
mod rates_test;

use crate::net::types::Rate;

/// Ticket for one issued rate request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateQuery {
    pub port_pair_id: i64,
    pub container_type_id: i64,
    pub generation: u64,
}

/// Displayed rate set and the selectors that produced it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RateQueryState {
    pub port_pair_id: Option<i64>,
    pub container_type_id: Option<i64>,
    pub generation: u64,
    pub rates: Vec<Rate>,
    pub loading: bool,
    pub error: Option<String>,
}

impl RateQueryState {
    /// Record new selector values and clear the displayed rates.
    ///
    /// Returns the query to issue, or `None` when either id is missing; in
    /// that case the rate set is already resolved to empty.
    pub fn select(&mut self, port_pair_id: Option<i64>, container_type_id: Option<i64>) -> Option<RateQuery> {
        self.port_pair_id = port_pair_id;
        self.container_type_id = container_type_id;
        self.generation += 1;
        self.rates.clear();
        self.error = None;

        match (port_pair_id, container_type_id) {
            (Some(port_pair_id), Some(container_type_id)) => {
                self.loading = true;
                Some(RateQuery { port_pair_id, container_type_id, generation: self.generation })
            }
            _ => {
                self.loading = false;
                None
            }
        }
    }

    /// Whether `query` still matches the current selectors.
    pub fn is_current(&self, query: &RateQuery) -> bool {
        query.generation == self.generation
            && self.port_pair_id == Some(query.port_pair_id)
            && self.container_type_id == Some(query.container_type_id)
    }

    /// Apply a response for `query`. Stale responses are dropped and `false`
    /// is returned.
    pub fn apply(&mut self, query: &RateQuery, result: Result<Vec<Rate>, String>) -> bool {
        if !self.is_current(query) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(rates) => {
                self.rates = rates;
                self.error = None;
            }
            Err(message) => {
                self.rates.clear();
                self.error = Some(message);
            }
        }
        true
    }

    pub fn contains(&self, rate_id: i64) -> bool {
        self.rates.iter().any(|r| r.id == rate_id)
    }
}
