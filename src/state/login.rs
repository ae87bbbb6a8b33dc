//! Login flow state machine.
//!
//! Normally a single form step, but a login rejected with a
//! requires-verification marker switches to code entry for the address
//! the server reports, reusing the same verify/resend shape as
//! registration. The page performs the requests and feeds results back;
//! a successful exchange ends the flow from the outside.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::auth::{CodeResponse, LoginFailure};
use crate::net::client::ApiError;
use crate::state::verify::{self, Step};

/// State of the login screen, created on mount and dropped with it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFlow {
    pub step: Step,
    pub email: String,
    pub password: String,
    pub code: String,
    /// Verification code echoed by the backend when email delivery is off.
    pub dev_code: Option<String>,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub submitting: bool,
    pub resending: bool,
}

impl LoginFlow {
    /// Begin the login request. Returns whether the caller should issue it.
    pub fn start_login(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.error = None;
        self.submitting = true;
        true
    }

    /// Record a failed login.
    ///
    /// An unverified account switches straight to code entry for the
    /// address the server reports, with no error banner; everything else
    /// stays on the form with the server's message.
    pub fn apply_login_failure(&mut self, failure: LoginFailure) {
        self.submitting = false;
        match failure {
            LoginFailure::RequiresVerification { email } => {
                self.email = email;
                self.code.clear();
                self.error = None;
                self.step = Step::Verify;
            }
            LoginFailure::Api(err) => self.error = Some(err.to_string()),
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
