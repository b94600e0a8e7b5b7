//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and quote fragments while reading the
//! session from Leptos context.

pub mod booking_link;
pub mod nav_bar;
pub mod quote_summary;
pub mod rate_picker;
