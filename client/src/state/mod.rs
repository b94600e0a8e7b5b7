//! Application state modules.
//!
//! ARCHITECTURE
//! ============
//! Each struct is plain data with explicit transition methods. Pages wrap
//! them in `RwSignal`s; `auth` is provided once as shared context, the rest
//! are route-local.

pub mod auth;
pub mod composer;
pub mod forms;
pub mod lookups;
pub mod quote;
pub mod quotes;
pub mod rates;
