//! Typed failures at the REST boundary.
//!
//! ERROR HANDLING
//! ==============
//! Every request outcome collapses into one of these variants before it
//! reaches a component. `Display` yields the inline status string shown to
//! the user, so pages never format transport details themselves.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure taxonomy for a single REST call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed (offline, CORS, DNS).
    #[error("Network error.")]
    Network(String),

    /// No response arrived within the request timeout.
    #[error("Network error: the server did not respond in time.")]
    Timeout,

    /// Non-success HTTP status; `message` is already the best available text.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Success status with a body that does not match the expected shape.
    #[error("Unexpected server response.")]
    Malformed(String),

    /// Called outside the browser (server-side rendering).
    #[error("Not available during server rendering.")]
    Unavailable,
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
