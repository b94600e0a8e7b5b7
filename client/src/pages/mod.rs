//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. State transitions live in `state` so they can be tested
//! without a browser.

pub mod admin;
pub mod home;
pub mod login;
pub mod new_quote;
pub mod quote_detail;
pub mod quotes_list;
