//! HTTP plumbing shared by every backend domain module.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the stored
//! bearer token attached to every request that has one. Server-side (SSR):
//! stubs that fail, since the backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an [`ApiError`]: `Status` for a non-2xx response (with
//! the decoded error payload kept for caller branching) and `Transport`
//! when no usable response arrived. Nothing here retries, and a 401 is not
//! treated specially — the startup session resolution owns that decision.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
use crate::net::token;

/// Uniform failure type produced by every request helper.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Status {
        status: u16,
        /// Server-provided error message, or a generic status line.
        message: String,
        /// Decoded error body, `Null` when the body was not JSON.
        payload: serde_json::Value,
    },
    /// No usable response: network failure, or an undecodable success body.
    #[error("{0}")]
    Transport(String),
}

impl ApiError {
    pub(crate) fn not_available() -> Self {
        Self::Transport("not available on server".to_owned())
    }
}

/// Build the error for a non-2xx response from its status and body text.
///
/// The backend reports failures as `{ "error": "..." }`, sometimes with
/// extra fields callers branch on; both are preserved.
pub fn status_error(status: u16, body: &str) -> ApiError {
    let payload: serde_json::Value = serde_json::from_str(body).unwrap_or(serde_json::Value::Null);
    let message = payload
        .get("error")
        .and_then(|v| v.as_str())
        .map_or_else(|| format!("request failed: {status}"), ToOwned::to_owned);
    ApiError::Status { status, message, payload }
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match token::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn handle<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(status_error(status, &body));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Transport(format!("invalid response body: {e}")))
}

/// `GET` a JSON resource.
///
/// # Errors
///
/// Fails with [`ApiError`] on any non-2xx status or network failure.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(path))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        handle(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::not_available())
    }
}

/// `POST` a JSON body and decode a JSON response.
///
/// # Errors
///
/// Fails with [`ApiError`] on any non-2xx status or network failure.
pub async fn post_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post(path))
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        handle(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::not_available())
    }
}

/// `PUT` a JSON body and decode a JSON response.
///
/// # Errors
///
/// Fails with [`ApiError`] on any non-2xx status or network failure.
pub async fn put_json<T: DeserializeOwned, B: Serialize>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::put(path))
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        handle(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::not_available())
    }
}

/// `DELETE` a resource, discarding the response body.
///
/// # Errors
///
/// Fails with [`ApiError`] on any non-2xx status or network failure.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::delete(path))
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(status_error(status, &body));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::not_available())
    }
}
