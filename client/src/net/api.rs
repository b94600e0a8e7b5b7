//! REST API helpers for communicating with the quoting backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, credentialed and
//! raced against `REQUEST_TIMEOUT_MS`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport reduces every exchange to a `RawResponse`; `decode` turns it into
//! a typed value or an `ApiError`. Nothing here panics or retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::decode::SoftList;
#[cfg(feature = "hydrate")]
use super::decode::{ListShape, RawResponse};
use super::error::ApiError;
use super::types::{
    ContainerType, Credentials, NewContainerType, NewPort, NewPortPair, NewQuote, NewRate, Port, PortPair, Quote,
    QuotePatch, Rate, User,
};

#[cfg(any(test, feature = "hydrate"))]
fn rates_endpoint(port_pair_id: i64, container_type_id: i64) -> String {
    format!(
        "/rates?port_pair_id={}&container_type_id={}",
        urlencoding::encode(&port_pair_id.to_string()),
        urlencoding::encode(&container_type_id.to_string())
    )
}

#[cfg(any(test, feature = "hydrate"))]
fn quote_endpoint(quote_id: i64) -> String {
    format!("/quotes/{quote_id}")
}

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug)]
enum Verb {
    Get,
    Post,
    Patch,
    Delete,
}

/// Issue one credentialed JSON request and collect status + body text.
#[cfg(feature = "hydrate")]
async fn send(verb: Verb, path: &str, body: Option<serde_json::Value>) -> Result<RawResponse, ApiError> {
    use futures::future::{Either, select};
    use gloo_net::http::Request;

    let url = crate::config::endpoint(path);
    let exchange = async move {
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Patch => Request::patch(&url),
            Verb::Delete => Request::delete(&url),
        }
        .credentials(web_sys::RequestCredentials::Include)
        .header("Content-Type", "application/json");
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;
        let response = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        Ok(RawResponse { status, body: text })
    };
    let timeout = gloo_timers::future::TimeoutFuture::new(crate::config::REQUEST_TIMEOUT_MS);

    let result = match select(Box::pin(exchange), Box::pin(timeout)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    };
    if let Err(e) = &result {
        log::warn!("{verb:?} {path} failed: {e:?}");
    }
    result
}

#[cfg(feature = "hydrate")]
fn to_body<T: serde::Serialize>(payload: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Malformed(e.to_string()))
}

// =============================================================================
// SESSION
// =============================================================================

/// Resolve the current session via `GET /auth/me`.
/// Returns `None` when logged out, on any failure, or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Get, "/auth/me", None).await.ok()?.entity::<User>().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Authenticate via `POST /auth/login`.
///
/// # Errors
///
/// Returns the backend `error` text or the HTTP status when login is rejected.
pub async fn login(credentials: &Credentials) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Post, "/auth/login", Some(to_body(credentials)?)).await?.entity()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// Create an account via `POST /auth/signup`; the backend signs the user in.
///
/// # Errors
///
/// Returns the backend `error` text or the HTTP status when signup is rejected.
pub async fn signup(credentials: &Credentials) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Post, "/auth/signup", Some(to_body(credentials)?)).await?.entity()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

/// End the session via `DELETE /auth/logout`. The outcome is ignored.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = send(Verb::Delete, "/auth/logout", None).await;
    }
}

// =============================================================================
// LOOKUP DATA
// =============================================================================

/// Fetch all ports via `GET /ports`.
///
/// # Errors
///
/// Returns an error on transport failure or non-success status.
pub async fn fetch_ports() -> Result<SoftList<Port>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Get, "/ports", None).await?.list(ListShape::Bare)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch all port pairs via `GET /port_pairs`.
///
/// # Errors
///
/// Returns an error on transport failure or non-success status.
pub async fn fetch_port_pairs() -> Result<SoftList<PortPair>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Get, "/port_pairs", None).await?.list(ListShape::Bare)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch all container types via `GET /container_types`.
///
/// # Errors
///
/// Returns an error on transport failure or non-success status.
pub async fn fetch_container_types() -> Result<SoftList<ContainerType>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Get, "/container_types", None).await?.list(ListShape::Bare)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the rates for one port pair and container type.
///
/// # Errors
///
/// Returns an error on transport failure or non-success status.
pub async fn fetch_rates(port_pair_id: i64, container_type_id: i64) -> Result<SoftList<Rate>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Get, &rates_endpoint(port_pair_id, container_type_id), None)
            .await?
            .list(ListShape::Bare)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (port_pair_id, container_type_id);
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// ADMIN CREATE
// =============================================================================

/// Create a port via `POST /ports`.
///
/// # Errors
///
/// Returns the backend `error` text or the HTTP status on rejection.
pub async fn create_port(port: &NewPort) -> Result<Port, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Post, "/ports", Some(to_body(port)?)).await?.entity()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = port;
        Err(ApiError::Unavailable)
    }
}

/// Create a container type via `POST /container_types`.
///
/// # Errors
///
/// Returns the backend `error` text or the HTTP status on rejection.
pub async fn create_container_type(container_type: &NewContainerType) -> Result<ContainerType, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Post, "/container_types", Some(to_body(container_type)?)).await?.entity()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = container_type;
        Err(ApiError::Unavailable)
    }
}

/// Create a port pair via `POST /port_pairs`.
///
/// # Errors
///
/// Returns the backend `error` text or the HTTP status on rejection.
pub async fn create_port_pair(pair: &NewPortPair) -> Result<PortPair, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Post, "/port_pairs", Some(to_body(pair)?)).await?.entity()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = pair;
        Err(ApiError::Unavailable)
    }
}

/// Create a rate via `POST /rates`.
///
/// # Errors
///
/// Returns the backend `error` text or the HTTP status on rejection.
pub async fn create_rate(rate: &NewRate) -> Result<Rate, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Post, "/rates", Some(to_body(rate)?)).await?.entity()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = rate;
        Err(ApiError::Unavailable)
    }
}

/// Create a user account on behalf of an admin via `POST /admin/users`.
///
/// # Errors
///
/// Returns the backend `error` text or the HTTP status on rejection.
pub async fn create_user(credentials: &Credentials) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Post, "/admin/users", Some(to_body(credentials)?)).await?.entity()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = credentials;
        Err(ApiError::Unavailable)
    }
}

// =============================================================================
// QUOTES
// =============================================================================

/// Fetch the quotes visible to this session via `GET /quotes`.
///
/// # Errors
///
/// Returns an error on transport failure or non-success status.
pub async fn fetch_quotes() -> Result<SoftList<Quote>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Get, "/quotes", None).await?.list(ListShape::BareOrEnveloped)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Create a quote via `POST /quotes` and return the new quote id.
///
/// # Errors
///
/// Returns the backend `error` text, the HTTP status, or `Malformed` when the
/// response lacks a numeric `id`.
pub async fn create_quote(quote: &NewQuote) -> Result<i64, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Post, "/quotes", Some(to_body(quote)?)).await?.created_id()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = quote;
        Err(ApiError::Unavailable)
    }
}

/// Fetch one quote via `GET /quotes/:id`.
///
/// # Errors
///
/// Returns an error on transport failure, non-success status (404 for a
/// missing quote), or an unexpected body.
pub async fn fetch_quote(quote_id: i64) -> Result<Quote, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Get, &quote_endpoint(quote_id), None).await?.entity()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = quote_id;
        Err(ApiError::Unavailable)
    }
}

/// Update title and/or status via `PATCH /quotes/:id`.
///
/// # Errors
///
/// Returns the backend `error` text or the HTTP status on rejection.
pub async fn update_quote(quote_id: i64, patch: &QuotePatch) -> Result<Quote, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Patch, &quote_endpoint(quote_id), Some(to_body(patch)?)).await?.entity()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (quote_id, patch);
        Err(ApiError::Unavailable)
    }
}

/// Delete a quote via `DELETE /quotes/:id`.
///
/// # Errors
///
/// Returns the backend `error` text or the HTTP status on rejection.
pub async fn delete_quote(quote_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        send(Verb::Delete, &quote_endpoint(quote_id), None).await?.empty()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = quote_id;
        Err(ApiError::Unavailable)
    }
}
