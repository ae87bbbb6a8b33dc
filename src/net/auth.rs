//! Authentication endpoints and the startup session resolution.
//!
//! The register/verify/resend trio drives the email-verification flow; the
//! backend echoes a `devCode` in environments where email delivery is not
//! configured. Login failures carry a `requiresVerification` marker when
//! the account exists but has not confirmed its address yet — callers
//! branch on [`LoginFailure`] instead of inspecting payloads themselves.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::{RwSignal, Update};
use serde::Deserialize;

use crate::net::client::{self, ApiError};
use crate::net::token;
use crate::net::types::User;
use crate::state::auth::AuthState;

/// Response of the register and resend-code endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeResponse {
    /// Verification code echoed by the backend when email delivery is off.
    pub dev_code: Option<String>,
}

/// Successful login or verification exchange.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

/// Why a login attempt failed.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginFailure {
    /// The account exists but its email is unverified; the flow should
    /// switch to code entry for `email`.
    RequiresVerification { email: String },
    /// Any other failure, surfaced to the user verbatim.
    Api(ApiError),
}

#[derive(Deserialize)]
struct MeResponse {
    user: User,
}

/// Split a login error into the requires-verification branch and the rest.
///
/// The server reports the address it sent the code to; when that field is
/// missing the typed email is used so the verify step always has one.
pub fn classify_login_failure(err: ApiError, typed_email: &str) -> LoginFailure {
    if let ApiError::Status { payload, .. } = &err {
        if payload.get("requiresVerification").and_then(serde_json::Value::as_bool) == Some(true) {
            let email = payload
                .get("email")
                .and_then(|v| v.as_str())
                .unwrap_or(typed_email)
                .to_owned();
            return LoginFailure::RequiresVerification { email };
        }
    }
    LoginFailure::Api(err)
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Fails with [`ApiError`] when the server rejects the registration.
pub async fn register(
    email: &str,
    username: &str,
    password: &str,
    confirm_password: &str,
) -> Result<CodeResponse, ApiError> {
    let payload = serde_json::json!({
        "email": email,
        "username": username,
        "password": password,
        "confirmPassword": confirm_password,
    });
    client::post_json("/api/auth/register", &payload).await
}

/// Confirm an email with a 6-digit code via `POST /api/auth/verify`.
///
/// # Errors
///
/// Fails with [`ApiError`] on an invalid or expired code.
pub async fn verify(email: &str, code: &str) -> Result<AuthPayload, ApiError> {
    let payload = serde_json::json!({ "email": email, "code": code });
    client::post_json("/api/auth/verify", &payload).await
}

/// Request a fresh verification code via `POST /api/auth/resend-code`.
///
/// # Errors
///
/// Fails with [`ApiError`] when the server declines (e.g. rate limiting).
pub async fn resend_code(email: &str) -> Result<CodeResponse, ApiError> {
    let payload = serde_json::json!({ "email": email });
    client::post_json("/api/auth/resend-code", &payload).await
}

/// Exchange credentials for a token via `POST /api/auth/login`.
///
/// # Errors
///
/// Fails with [`LoginFailure::RequiresVerification`] for unverified
/// accounts and [`LoginFailure::Api`] for everything else.
pub async fn login(email: &str, password: &str) -> Result<AuthPayload, LoginFailure> {
    let payload = serde_json::json!({ "email": email, "password": password });
    client::post_json("/api/auth/login", &payload)
        .await
        .map_err(|err| classify_login_failure(err, email))
}

/// Fetch the identity behind the stored token via `GET /api/auth/me`.
///
/// # Errors
///
/// Fails with [`ApiError`] when the token is invalid or expired.
pub async fn fetch_me() -> Result<User, ApiError> {
    client::get_json::<MeResponse>("/api/auth/me")
        .await
        .map(|resp| resp.user)
}

/// One-shot startup resolution of the stored token into a session.
///
/// Runs exactly once when the app hydrates. Without a token the session
/// resolves to signed-out immediately; with one, any `/api/auth/me`
/// failure purges the store. This is the only proactive purge of a stale
/// token — later auth failures surface as ordinary request errors.
pub async fn resolve_session(auth: RwSignal<AuthState>) {
    if token::get_token().is_none() {
        auth.update(|a| a.finish_resolve(None));
        return;
    }
    let result = fetch_me().await;
    auth.update(|a| a.apply_me_result(result));
}
