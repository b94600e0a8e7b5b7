//! Compile-time client configuration.
//!
//! The API base is baked into the WASM bundle from `FREIGHT_API_BASE` at build
//! time. An empty base means the backend shares the page origin.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Upper bound for a single REST request before it resolves as a network error.
pub const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Mailbox that receives booking requests for accepted quotes.
pub const BOOKING_CONTACT: &str = "bookings@paperboat.example";

/// API base compiled into the bundle, without a trailing slash.
pub fn api_base() -> &'static str {
    normalize_base(option_env!("FREIGHT_API_BASE").unwrap_or(""))
}

fn normalize_base(raw: &str) -> &str {
    raw.trim().trim_end_matches('/')
}

/// Join the API base with an absolute request path.
pub fn endpoint(path: &str) -> String {
    join_endpoint(api_base(), path)
}

fn join_endpoint(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}
