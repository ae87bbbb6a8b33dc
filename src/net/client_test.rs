use super::*;

#[test]
fn status_error_uses_server_message() {
    let err = status_error(400, r#"{"error":"Passwords do not match"}"#);
    let ApiError::Status { status, message, .. } = err else {
        panic!("expected status error");
    };
    assert_eq!(status, 400);
    assert_eq!(message, "Passwords do not match");
}

#[test]
fn status_error_keeps_extra_payload_fields() {
    let err = status_error(403, r#"{"error":"unverified","requiresVerification":true,"email":"a@b.com"}"#);
    let ApiError::Status { payload, .. } = err else {
        panic!("expected status error");
    };
    assert_eq!(payload["requiresVerification"], serde_json::json!(true));
    assert_eq!(payload["email"], serde_json::json!("a@b.com"));
}

#[test]
fn status_error_falls_back_to_status_line() {
    let err = status_error(502, "<html>bad gateway</html>");
    let ApiError::Status { message, payload, .. } = err else {
        panic!("expected status error");
    };
    assert_eq!(message, "request failed: 502");
    assert_eq!(payload, serde_json::Value::Null);
}

#[test]
fn status_error_without_error_field_falls_back() {
    let err = status_error(500, r#"{"detail":"boom"}"#);
    let ApiError::Status { message, .. } = err else {
        panic!("expected status error");
    };
    assert_eq!(message, "request failed: 500");
}

#[test]
fn api_error_displays_message() {
    assert_eq!(
        status_error(401, r#"{"error":"Invalid credentials"}"#).to_string(),
        "Invalid credentials"
    );
    assert_eq!(
        ApiError::Transport("connection refused".to_owned()).to_string(),
        "connection refused"
    );
}
