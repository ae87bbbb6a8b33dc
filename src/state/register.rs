//! Registration flow state machine.
//!
//! Two steps: the account form, then code entry for the emailed
//! verification code. The machine owns validation, step transitions, and
//! the in-flight flags; the page performs the actual requests and feeds
//! results back in. A successful verify exchange ends the flow from the
//! outside — the page installs the session and navigates away.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use crate::net::auth::CodeResponse;
use crate::net::client::ApiError;
use crate::state::verify::{self, Step};

/// Minimum accepted password length, matching the backend's rule.
pub const MIN_PASSWORD_LEN: usize = 6;

/// State of the registration screen, created on mount and dropped with it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegisterFlow {
    pub step: Step,
    pub email: String,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub code: String,
    /// Verification code echoed by the backend when email delivery is off.
    pub dev_code: Option<String>,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub submitting: bool,
    pub resending: bool,
}

impl RegisterFlow {
    /// Begin the registration request, validating locally first.
    ///
    /// Password mismatch and short passwords fail here with a validation
    /// error; no request may be sent. Returns whether the caller should
    /// issue the request.
    pub fn start_register(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.error = None;
        self.dev_code = None;
        if self.password != self.confirm_password {
            self.error = Some("Passwords do not match".to_owned());
            return false;
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            self.error = Some("Password must be at least 6 characters".to_owned());
            return false;
        }
        self.submitting = true;
        true
    }

    /// Fold the registration response back in.
    ///
    /// Success moves to code entry, keeping an echoed dev code for
    /// display; failure stays on the form with the server's message.
    pub fn apply_register_result(&mut self, result: Result<CodeResponse, ApiError>) {
        self.submitting = false;
        match result {
            Ok(resp) => {
                self.dev_code = resp.dev_code;
                self.step = Step::Verify;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Accept raw code input, keeping only digits up to the code length.
    pub fn set_code(&mut self, input: &str) {
        self.code = verify::sanitize_code(input);
    }

    /// Whether the code is complete and no request is in flight.
    pub fn can_submit_code(&self) -> bool {
        !self.submitting && verify::is_complete(&self.code)
    }

    /// Begin the verify request. Returns whether the caller should issue it.
    pub fn start_verify(&mut self) -> bool {
        if !self.can_submit_code() {
            return false;
        }
        self.error = None;
        self.submitting = true;
        true
    }

    /// Record a failed verify attempt; the flow stays on code entry.
    pub fn fail_verify(&mut self, message: String) {
        self.submitting = false;
        self.error = Some(message);
    }

    /// Begin a resend request. Returns whether the caller should issue it.
    pub fn start_resend(&mut self) -> bool {
        if self.resending {
            return false;
        }
        self.error = None;
        self.dev_code = None;
        self.notice = None;
        self.resending = true;
        true
    }

    /// Fold the resend response back in. Does not change the step.
    pub fn apply_resend_result(&mut self, result: Result<CodeResponse, ApiError>) {
        self.resending = false;
        match result {
            Ok(CodeResponse { dev_code: Some(code) }) => self.dev_code = Some(code),
            Ok(CodeResponse { dev_code: None }) => {
                self.notice = Some("Verification code sent. Check your email.".to_owned());
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    /// Return to the form, discarding code entry state. No network contact.
    pub fn back_to_form(&mut self) {
        self.step = Step::Form;
        self.code.clear();
        self.dev_code = None;
        self.error = None;
        self.notice = None;
    }
}
