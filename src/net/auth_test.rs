use super::*;
use crate::net::client::status_error;

#[test]
fn classify_picks_requires_verification_with_server_email() {
    let err = status_error(
        403,
        r#"{"error":"Email not verified","requiresVerification":true,"email":"a@b.com"}"#,
    );
    assert_eq!(
        classify_login_failure(err, "typed@example.com"),
        LoginFailure::RequiresVerification { email: "a@b.com".to_owned() }
    );
}

#[test]
fn classify_falls_back_to_typed_email() {
    let err = status_error(403, r#"{"error":"Email not verified","requiresVerification":true}"#);
    assert_eq!(
        classify_login_failure(err, "typed@example.com"),
        LoginFailure::RequiresVerification { email: "typed@example.com".to_owned() }
    );
}

#[test]
fn classify_keeps_ordinary_failures() {
    let err = status_error(401, r#"{"error":"Invalid credentials"}"#);
    let LoginFailure::Api(api) = classify_login_failure(err, "a@b.com") else {
        panic!("expected api failure");
    };
    assert_eq!(api.to_string(), "Invalid credentials");
}

#[test]
fn classify_keeps_transport_failures() {
    let err = ApiError::Transport("connection refused".to_owned());
    assert_eq!(
        classify_login_failure(err.clone(), "a@b.com"),
        LoginFailure::Api(err)
    );
}

#[test]
fn code_response_reads_camel_case_dev_code() {
    let resp: CodeResponse = serde_json::from_str(r#"{"devCode":"123456"}"#).unwrap();
    assert_eq!(resp.dev_code.as_deref(), Some("123456"));

    let resp: CodeResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(resp.dev_code, None);
}
