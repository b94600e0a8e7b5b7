//! Networking modules for the quoting REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues requests, `decode` validates response shapes, `error` defines
//! the failure taxonomy, and `types` defines the wire schema.

pub mod api;
pub mod decode;
pub mod error;
pub mod types;
