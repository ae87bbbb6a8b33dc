//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Exactly one `AuthState` lives in context for the whole app. Route gates
//! and user-aware components read it; the login/verify flows and the
//! startup resolver are its only writers. Token persistence rides along
//! inside the mutators so the store can never disagree with the session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::client::ApiError;
use crate::net::token;
use crate::net::types::User;

/// Landing page for ordinary users.
pub const DEFAULT_LANDING: &str = "/";
/// Landing page for superadmins.
pub const ADMIN_LANDING: &str = "/dashboard";
/// Entry point of the login flow.
pub const LOGIN_PATH: &str = "/login";

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true from process start until the one-shot startup
/// resolution finishes; no other transition sets it. Consumers must not
/// make authorization decisions while it is true.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

/// Outcome of a route-gate check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Gate {
    /// Session still resolving; render the waiting state, decide nothing.
    Pending,
    /// Render the gated children.
    Allow,
    /// Navigate away instead of rendering.
    Redirect(String),
}

impl AuthState {
    /// Install a session from a successful login or verify exchange.
    ///
    /// The token is persisted before the identity becomes visible, so any
    /// request triggered by the state change already authenticates.
    pub fn login(&mut self, token_value: &str, user: User) {
        token::set_token(token_value);
        self.user = Some(user);
        self.loading = false;
    }

    /// Drop the session and the stored token. Idempotent.
    pub fn logout(&mut self) {
        token::clear_token();
        self.user = None;
        self.loading = false;
    }

    /// Complete the startup resolution with an already-decided identity.
    pub fn finish_resolve(&mut self, user: Option<User>) {
        self.user = user;
        self.loading = false;
    }

    /// Complete the startup resolution from the `/api/auth/me` outcome.
    ///
    /// Any failure — expired token, bad token, transport — purges the
    /// stored token and resolves to signed-out.
    pub fn apply_me_result(&mut self, result: Result<User, ApiError>) {
        match result {
            Ok(user) => self.finish_resolve(Some(user)),
            Err(_) => {
                token::clear_token();
                self.finish_resolve(None);
            }
        }
    }

    /// Gate for screens only guests may see (login, register).
    pub fn guest_gate(&self) -> Gate {
        if self.loading {
            return Gate::Pending;
        }
        match &self.user {
            Some(user) if user.is_superadmin() => Gate::Redirect(ADMIN_LANDING.to_owned()),
            Some(_) => Gate::Redirect(DEFAULT_LANDING.to_owned()),
            None => Gate::Allow,
        }
    }

    /// Gate for screens requiring a session, optionally the elevated role.
    ///
    /// `attempted` is the destination being gated; it is carried to the
    /// login flow so a successful sign-in can return there.
    pub fn protected_gate(&self, require_superadmin: bool, attempted: &str) -> Gate {
        if self.loading {
            return Gate::Pending;
        }
        let Some(user) = &self.user else {
            return Gate::Redirect(login_redirect(attempted));
        };
        if require_superadmin && !user.is_superadmin() {
            return Gate::Redirect(DEFAULT_LANDING.to_owned());
        }
        Gate::Allow
    }
}

/// Login path carrying the attempted destination as a `from` parameter.
pub fn login_redirect(attempted: &str) -> String {
    if attempted.is_empty() || attempted == DEFAULT_LANDING {
        LOGIN_PATH.to_owned()
    } else {
        format!("{LOGIN_PATH}?from={attempted}")
    }
}

/// Where to navigate after a successful login or verification.
///
/// Superadmins always land on the admin console; everyone else returns to
/// the destination captured by the protected gate, or the default landing.
pub fn post_login_destination(user: &User, from: Option<&str>) -> String {
    if user.is_superadmin() {
        return ADMIN_LANDING.to_owned();
    }
    match from {
        Some(path) if !path.is_empty() => path.to_owned(),
        _ => DEFAULT_LANDING.to_owned(),
    }
}
