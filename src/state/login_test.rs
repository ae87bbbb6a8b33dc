use super::*;
use crate::net::client::status_error;

// =============================================================
// Login submit
// =============================================================

#[test]
fn start_login_sets_in_flight_and_clears_error() {
    let mut flow = LoginFlow { error: Some("stale".to_owned()), ..LoginFlow::default() };
    assert!(flow.start_login());
    assert!(flow.submitting);
    assert_eq!(flow.error, None);
}

#[test]
fn start_login_refuses_while_in_flight() {
    let mut flow = LoginFlow::default();
    assert!(flow.start_login());
    assert!(!flow.start_login());
}

#[test]
fn unverified_account_switches_to_code_entry_without_error() {
    let mut flow = LoginFlow { email: "typed@example.com".to_owned(), ..LoginFlow::default() };
    flow.start_login();

    flow.apply_login_failure(LoginFailure::RequiresVerification { email: "a@b.com".to_owned() });
    assert_eq!(flow.step, Step::Verify);
    assert_eq!(flow.email, "a@b.com");
    assert_eq!(flow.error, None);
    assert_eq!(flow.code, "");
    assert!(!flow.submitting);
}

#[test]
fn ordinary_failure_stays_on_form_with_message() {
    let mut flow = LoginFlow { email: "a@b.com".to_owned(), ..LoginFlow::default() };
    flow.start_login();

    let err = status_error(401, r#"{"error":"Invalid credentials"}"#);
    flow.apply_login_failure(LoginFailure::Api(err));
    assert_eq!(flow.step, Step::Form);
    assert_eq!(flow.error.as_deref(), Some("Invalid credentials"));
    assert!(!flow.submitting);
}

#[test]
fn transport_failure_surfaces_its_message() {
    let mut flow = LoginFlow::default();
    flow.start_login();

    flow.apply_login_failure(LoginFailure::Api(ApiError::Transport("connection refused".to_owned())));
    assert_eq!(flow.error.as_deref(), Some("connection refused"));
}

// =============================================================
// Code entry
// =============================================================

#[test]
fn set_code_sanitizes_input() {
    let mut flow = LoginFlow::default();
    flow.set_code(" 9 8 7 6 5 4 3 ");
    assert_eq!(flow.code, "987654");
}

#[test]
fn submit_disabled_until_code_complete() {
    let mut flow = LoginFlow { step: Step::Verify, ..LoginFlow::default() };
    flow.set_code("98765");
    assert!(!flow.can_submit_code());
    assert!(!flow.start_verify());

    flow.set_code("987654");
    assert!(flow.start_verify());
    assert!(flow.submitting);
}

#[test]
fn failed_verify_surfaces_message_and_stays_on_verify() {
    let mut flow = LoginFlow { step: Step::Verify, code: "987654".to_owned(), ..LoginFlow::default() };
    flow.start_verify();

    flow.fail_verify("Invalid or expired code".to_owned());
    assert_eq!(flow.step, Step::Verify);
    assert_eq!(flow.error.as_deref(), Some("Invalid or expired code"));
    assert!(!flow.submitting);
}

// =============================================================
// Resend and back
// =============================================================

#[test]
fn resend_with_dev_code_displays_it() {
    let mut flow = LoginFlow { step: Step::Verify, ..LoginFlow::default() };
    flow.start_resend();

    flow.apply_resend_result(Ok(CodeResponse { dev_code: Some("111222".to_owned()) }));
    assert_eq!(flow.dev_code.as_deref(), Some("111222"));
    assert_eq!(flow.step, Step::Verify);
}

#[test]
fn resend_without_dev_code_shows_sent_notice() {
    let mut flow = LoginFlow { step: Step::Verify, ..LoginFlow::default() };
    flow.start_resend();

    flow.apply_resend_result(Ok(CodeResponse { dev_code: None }));
    assert!(flow.notice.is_some());
}

#[test]
fn back_to_form_discards_code_entry_state() {
    let mut flow = LoginFlow {
        step: Step::Verify,
        email: "a@b.com".to_owned(),
        code: "987654".to_owned(),
        dev_code: Some("987654".to_owned()),
        error: Some("boom".to_owned()),
        ..LoginFlow::default()
    };

    flow.back_to_form();
    assert_eq!(flow.step, Step::Form);
    assert_eq!(flow.code, "");
    assert_eq!(flow.dev_code, None);
    assert_eq!(flow.error, None);
    assert_eq!(flow.email, "a@b.com");
}
