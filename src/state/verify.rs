//! Verification-code entry shared by the register and login flows.

#[cfg(test)]
#[path = "verify_test.rs"]
mod verify_test;

/// Number of digits in a verification code.
pub const CODE_LEN: usize = 6;

/// Which half of a two-step auth flow is on screen.
///
/// `Form` collects credentials; `Verify` collects the emailed code. A
/// successful exchange inside `Verify` ends the flow by installing a
/// session, so there is no third state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Form,
    Verify,
}

/// Normalize raw code input: digits only, truncated at [`CODE_LEN`].
///
/// Applied on every keystroke, so the stored code always satisfies
/// `len <= 6` and all-digits no matter what was typed or pasted.
pub fn sanitize_code(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).take(CODE_LEN).collect()
}

/// Whether `code` is a complete, submittable verification code.
pub fn is_complete(code: &str) -> bool {
    code.len() == CODE_LEN && code.chars().all(|c| c.is_ascii_digit())
}
