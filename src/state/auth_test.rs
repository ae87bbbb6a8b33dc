use super::*;
use crate::net::client::{ApiError, status_error};
use crate::net::token;

fn user(role: &str) -> User {
    User {
        id: 1,
        email: "a@b.com".to_owned(),
        username: Some("anna".to_owned()),
        role: role.to_owned(),
    }
}

// =============================================================
// Session transitions
// =============================================================

#[test]
fn default_starts_loading_with_no_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.user, None);
}

#[test]
fn login_persists_token_and_installs_user() {
    let mut state = AuthState::default();
    state.login("tok-1", user("user"));

    assert_eq!(token::get_token().as_deref(), Some("tok-1"));
    assert_eq!(state.user, Some(user("user")));
    assert!(!state.loading);
}

#[test]
fn login_then_logout_leaves_signed_out_and_empty_store() {
    let mut state = AuthState::default();
    state.login("tok-1", user("user"));
    state.logout();

    assert_eq!(token::get_token(), None);
    assert_eq!(state.user, None);
    assert!(!state.loading);
}

#[test]
fn logout_without_session_is_a_no_op() {
    let mut state = AuthState::default();
    state.logout();
    state.logout();

    assert_eq!(token::get_token(), None);
    assert_eq!(state.user, None);
    assert!(!state.loading);
}

#[test]
fn relogin_replaces_the_stored_token() {
    let mut state = AuthState::default();
    state.login("tok-1", user("user"));
    state.login("tok-2", user("superadmin"));

    assert_eq!(token::get_token().as_deref(), Some("tok-2"));
    assert_eq!(state.user, Some(user("superadmin")));
}

// =============================================================
// Startup resolution
// =============================================================

#[test]
fn me_success_resolves_identity() {
    let mut state = AuthState::default();
    token::set_token("tok-1");

    state.apply_me_result(Ok(user("user")));
    assert_eq!(state.user, Some(user("user")));
    assert!(!state.loading);
    assert_eq!(token::get_token().as_deref(), Some("tok-1"));
}

#[test]
fn me_status_failure_purges_token_and_resolves_signed_out() {
    let mut state = AuthState::default();
    token::set_token("stale");

    state.apply_me_result(Err(status_error(401, r#"{"error":"Invalid token"}"#)));
    assert_eq!(token::get_token(), None);
    assert_eq!(state.user, None);
    assert!(!state.loading);
}

#[test]
fn me_transport_failure_also_purges_token() {
    let mut state = AuthState::default();
    token::set_token("stale");

    state.apply_me_result(Err(ApiError::Transport("connection refused".to_owned())));
    assert_eq!(token::get_token(), None);
    assert_eq!(state.user, None);
    assert!(!state.loading);
}

#[test]
fn finish_resolve_without_token_resolves_signed_out() {
    let mut state = AuthState::default();
    state.finish_resolve(None);
    assert_eq!(state.user, None);
    assert!(!state.loading);
}

// =============================================================
// Guest gate
// =============================================================

#[test]
fn guest_gate_pends_while_loading() {
    let state = AuthState { user: Some(user("user")), loading: true };
    assert_eq!(state.guest_gate(), Gate::Pending);
}

#[test]
fn guest_gate_allows_guests() {
    let state = AuthState { user: None, loading: false };
    assert_eq!(state.guest_gate(), Gate::Allow);
}

#[test]
fn guest_gate_redirects_users_to_default_landing() {
    let state = AuthState { user: Some(user("user")), loading: false };
    assert_eq!(state.guest_gate(), Gate::Redirect(DEFAULT_LANDING.to_owned()));
}

#[test]
fn guest_gate_redirects_superadmins_to_admin_landing() {
    let state = AuthState { user: Some(user("superadmin")), loading: false };
    assert_eq!(state.guest_gate(), Gate::Redirect(ADMIN_LANDING.to_owned()));
}

// =============================================================
// Protected gate
// =============================================================

#[test]
fn protected_gate_pends_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert_eq!(state.protected_gate(false, "/learn"), Gate::Pending);
    assert_eq!(state.protected_gate(true, "/dashboard"), Gate::Pending);
}

#[test]
fn protected_gate_sends_guests_to_login_with_destination() {
    let state = AuthState { user: None, loading: false };
    assert_eq!(
        state.protected_gate(false, "/learn"),
        Gate::Redirect("/login?from=/learn".to_owned())
    );
}

#[test]
fn protected_gate_allows_signed_in_users() {
    let state = AuthState { user: Some(user("user")), loading: false };
    assert_eq!(state.protected_gate(false, "/learn"), Gate::Allow);
}

#[test]
fn elevated_gate_allows_only_superadmins() {
    let admin = AuthState { user: Some(user("superadmin")), loading: false };
    assert_eq!(admin.protected_gate(true, "/dashboard"), Gate::Allow);

    let plain = AuthState { user: Some(user("user")), loading: false };
    assert_eq!(
        plain.protected_gate(true, "/dashboard"),
        Gate::Redirect(DEFAULT_LANDING.to_owned())
    );
}

#[test]
fn elevated_gate_checks_presence_before_role() {
    let state = AuthState { user: None, loading: false };
    assert_eq!(
        state.protected_gate(true, "/dashboard"),
        Gate::Redirect("/login?from=/dashboard".to_owned())
    );
}

// =============================================================
// Redirect helpers
// =============================================================

#[test]
fn login_redirect_skips_from_for_default_landing() {
    assert_eq!(login_redirect(""), LOGIN_PATH);
    assert_eq!(login_redirect("/"), LOGIN_PATH);
    assert_eq!(login_redirect("/learn"), "/login?from=/learn");
}

#[test]
fn post_login_prefers_admin_landing_for_superadmins() {
    assert_eq!(post_login_destination(&user("superadmin"), Some("/learn")), ADMIN_LANDING);
    assert_eq!(post_login_destination(&user("superadmin"), None), ADMIN_LANDING);
}

#[test]
fn post_login_returns_to_captured_destination() {
    assert_eq!(post_login_destination(&user("user"), Some("/learn")), "/learn");
}

#[test]
fn post_login_falls_back_to_default_landing() {
    assert_eq!(post_login_destination(&user("user"), None), DEFAULT_LANDING);
    assert_eq!(post_login_destination(&user("user"), Some("")), DEFAULT_LANDING);
}
