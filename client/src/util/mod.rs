//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep formatting and gating rules out of page components so
//! they can be tested without a browser.

pub mod auth;
pub mod booking;
pub mod format;
