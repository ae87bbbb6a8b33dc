use super::*;
use crate::net::client::status_error;

fn filled_form() -> RegisterFlow {
    RegisterFlow {
        email: "a@b.com".to_owned(),
        username: "anna".to_owned(),
        password: "abcdef".to_owned(),
        confirm_password: "abcdef".to_owned(),
        ..RegisterFlow::default()
    }
}

// =============================================================
// Local validation
// =============================================================

#[test]
fn short_password_fails_locally() {
    let mut flow = filled_form();
    flow.password = "abc12".to_owned();
    flow.confirm_password = "abc12".to_owned();

    assert!(!flow.start_register());
    assert_eq!(flow.error.as_deref(), Some("Password must be at least 6 characters"));
    assert!(!flow.submitting);
    assert_eq!(flow.step, Step::Form);
}

#[test]
fn mismatched_confirmation_fails_locally() {
    let mut flow = filled_form();
    flow.confirm_password = "abcdef1".to_owned();

    assert!(!flow.start_register());
    assert_eq!(flow.error.as_deref(), Some("Passwords do not match"));
    assert!(!flow.submitting);
}

#[test]
fn mismatch_is_reported_before_length() {
    let mut flow = filled_form();
    flow.password = "abc".to_owned();
    flow.confirm_password = "xyz".to_owned();

    assert!(!flow.start_register());
    assert_eq!(flow.error.as_deref(), Some("Passwords do not match"));
}

#[test]
fn valid_form_starts_submitting() {
    let mut flow = filled_form();
    flow.error = Some("stale".to_owned());
    flow.dev_code = Some("000000".to_owned());

    assert!(flow.start_register());
    assert!(flow.submitting);
    assert_eq!(flow.error, None);
    assert_eq!(flow.dev_code, None);
}

#[test]
fn start_register_refuses_while_in_flight() {
    let mut flow = filled_form();
    assert!(flow.start_register());
    assert!(!flow.start_register());
}

// =============================================================
// Register result
// =============================================================

#[test]
fn register_success_moves_to_verify_with_dev_code() {
    let mut flow = filled_form();
    flow.start_register();

    flow.apply_register_result(Ok(CodeResponse { dev_code: Some("123456".to_owned()) }));
    assert_eq!(flow.step, Step::Verify);
    assert_eq!(flow.dev_code.as_deref(), Some("123456"));
    assert!(!flow.submitting);
    assert_eq!(flow.error, None);
}

#[test]
fn register_success_without_dev_code() {
    let mut flow = filled_form();
    flow.start_register();

    flow.apply_register_result(Ok(CodeResponse { dev_code: None }));
    assert_eq!(flow.step, Step::Verify);
    assert_eq!(flow.dev_code, None);
}

#[test]
fn register_failure_stays_on_form_with_server_message() {
    let mut flow = filled_form();
    flow.start_register();

    flow.apply_register_result(Err(status_error(400, r#"{"error":"Email already registered"}"#)));
    assert_eq!(flow.step, Step::Form);
    assert_eq!(flow.error.as_deref(), Some("Email already registered"));
    assert!(!flow.submitting);
}

// =============================================================
// Code entry
// =============================================================

#[test]
fn set_code_sanitizes_input() {
    let mut flow = RegisterFlow::default();
    flow.set_code("12ab34!5678");
    assert_eq!(flow.code, "123456");
}

#[test]
fn submit_disabled_until_code_complete() {
    let mut flow = RegisterFlow { step: Step::Verify, ..RegisterFlow::default() };
    flow.set_code("12345");
    assert!(!flow.can_submit_code());
    assert!(!flow.start_verify());

    flow.set_code("123456");
    assert!(flow.can_submit_code());
    assert!(flow.start_verify());
    assert!(flow.submitting);
    assert!(!flow.can_submit_code());
}

#[test]
fn failed_verify_surfaces_message_and_stays_on_verify() {
    let mut flow = RegisterFlow { step: Step::Verify, code: "123456".to_owned(), ..RegisterFlow::default() };
    flow.start_verify();

    flow.fail_verify("Invalid or expired code".to_owned());
    assert_eq!(flow.step, Step::Verify);
    assert_eq!(flow.error.as_deref(), Some("Invalid or expired code"));
    assert!(!flow.submitting);
}

// =============================================================
// Resend
// =============================================================

#[test]
fn resend_with_dev_code_displays_it() {
    let mut flow = RegisterFlow { step: Step::Verify, ..RegisterFlow::default() };
    assert!(flow.start_resend());
    assert!(flow.resending);

    flow.apply_resend_result(Ok(CodeResponse { dev_code: Some("654321".to_owned()) }));
    assert_eq!(flow.dev_code.as_deref(), Some("654321"));
    assert_eq!(flow.notice, None);
    assert!(!flow.resending);
    assert_eq!(flow.step, Step::Verify);
}

#[test]
fn resend_without_dev_code_shows_sent_notice() {
    let mut flow = RegisterFlow { step: Step::Verify, ..RegisterFlow::default() };
    flow.start_resend();

    flow.apply_resend_result(Ok(CodeResponse { dev_code: None }));
    assert!(flow.notice.is_some());
    assert_eq!(flow.dev_code, None);
}

#[test]
fn resend_failure_surfaces_message() {
    let mut flow = RegisterFlow { step: Step::Verify, ..RegisterFlow::default() };
    flow.start_resend();

    flow.apply_resend_result(Err(status_error(429, r#"{"error":"Too many requests"}"#)));
    assert_eq!(flow.error.as_deref(), Some("Too many requests"));
    assert!(!flow.resending);
}

#[test]
fn resend_refuses_while_in_flight() {
    let mut flow = RegisterFlow { step: Step::Verify, ..RegisterFlow::default() };
    assert!(flow.start_resend());
    assert!(!flow.start_resend());
}

// =============================================================
// Back to form
// =============================================================

#[test]
fn back_to_form_discards_code_entry_state() {
    let mut flow = RegisterFlow {
        step: Step::Verify,
        email: "a@b.com".to_owned(),
        code: "123456".to_owned(),
        dev_code: Some("123456".to_owned()),
        error: Some("boom".to_owned()),
        notice: Some("sent".to_owned()),
        ..RegisterFlow::default()
    };

    flow.back_to_form();
    assert_eq!(flow.step, Step::Form);
    assert_eq!(flow.code, "");
    assert_eq!(flow.dev_code, None);
    assert_eq!(flow.error, None);
    assert_eq!(flow.notice, None);
    // The typed form fields survive the round trip.
    assert_eq!(flow.email, "a@b.com");
}
