//! Reference collections feeding selection controls.
//!
//! DESIGN
//! ======
//! The three lookups load in parallel and are applied together. Each failed or
//! malformed collection degrades to empty; any failure raises one aggregate
//! notice and never blocks the rest of the page. Each load takes a generation
//! ticket; a reload that finishes after a newer one started is dropped.

#[cfg(test)]
#[path = "lookups_test.rs"]
mod lookups_test;

use crate::net::decode::SoftList;
use crate::net::error::ApiError;
use crate::net::types::{ContainerType, Port, PortPair};

pub const LOOKUP_FAILED_NOTICE: &str = "Failed to load lookup data.";

/// Ports, port pairs and container types for one page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LookupState {
    pub ports: Vec<Port>,
    pub port_pairs: Vec<PortPair>,
    pub container_types: Vec<ContainerType>,
    pub loading: bool,
    pub error: Option<String>,
    pub generation: u64,
}

impl LookupState {
    /// Start a load and return its generation ticket.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Apply the three parallel responses at once. A superseded ticket is
    /// dropped and `false` is returned.
    pub fn apply(
        &mut self,
        ticket: u64,
        ports: Result<SoftList<Port>, ApiError>,
        port_pairs: Result<SoftList<PortPair>, ApiError>,
        container_types: Result<SoftList<ContainerType>, ApiError>,
    ) -> bool {
        if ticket != self.generation {
            return false;
        }
        let mut failed = false;
        self.ports = take_items(ports, &mut failed);
        self.port_pairs = take_items(port_pairs, &mut failed);
        self.container_types = take_items(container_types, &mut failed);
        self.loading = false;
        self.error = failed.then(|| LOOKUP_FAILED_NOTICE.to_owned());
        true
    }

    pub fn port_pair(&self, id: i64) -> Option<&PortPair> {
        self.port_pairs.iter().find(|p| p.id == id)
    }

    pub fn port(&self, id: i64) -> Option<&Port> {
        self.ports.iter().find(|p| p.id == id)
    }
}

/// Only request failures count toward the notice; a non-array body quietly
/// collapses to empty.
fn take_items<T>(result: Result<SoftList<T>, ApiError>, failed: &mut bool) -> Vec<T> {
    match result {
        Ok(list) => list.items,
        Err(_) => {
            *failed = true;
            Vec::new()
        }
    }
}
