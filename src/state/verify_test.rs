use super::*;

#[test]
fn step_default_is_form() {
    assert_eq!(Step::default(), Step::Form);
}

#[test]
fn sanitize_strips_non_digits() {
    assert_eq!(sanitize_code("12a3 4-5b6"), "123456");
    assert_eq!(sanitize_code("abc"), "");
}

#[test]
fn sanitize_truncates_at_six_digits() {
    assert_eq!(sanitize_code("1234567890"), "123456");
}

#[test]
fn sanitize_holds_invariant_under_any_keystroke_sequence() {
    // Simulates retyping after arbitrary junk lands in the field: the
    // stored value must stay <= 6 chars, all digits, at every point.
    let keystrokes = ["1", "1a", "1a2", "1a2!", "1a2!345", "1a2!3456789", "x1a2!3456789y"];
    let mut value = String::new();
    for typed in keystrokes {
        value = sanitize_code(typed);
        assert!(value.len() <= CODE_LEN);
        assert!(value.chars().all(|c| c.is_ascii_digit()));
    }
    assert_eq!(value, "123456");
}

#[test]
fn is_complete_requires_exactly_six_digits() {
    assert!(is_complete("123456"));
    assert!(!is_complete("12345"));
    assert!(!is_complete("1234567"));
    assert!(!is_complete("12345a"));
    assert!(!is_complete(""));
}
