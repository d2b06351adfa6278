use super::*;
use serde_json::json;

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials::new("a@b.com", "hunter2");
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("a@b.com"));
    assert!(rendered.contains("<redacted>"));
    assert!(!rendered.contains("hunter2"));
}

#[test]
fn credentials_serialize_as_login_body() {
    let creds = Credentials::new("a@b.com", "pw");
    let value = serde_json::to_value(&creds).unwrap();
    assert_eq!(value, json!({"email": "a@b.com", "password": "pw"}));
}

#[test]
fn credentials_default_is_empty() {
    let creds = Credentials::default();
    assert!(creds.email.is_empty());
    assert!(creds.password.is_empty());
}

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_with_user() {
    let body = json!({
        "ok": true,
        "user": {"id": "u1", "email": "a@b.com", "name": "Alice"}
    });
    let resp: LoginResponse = serde_json::from_value(body).unwrap();
    assert_eq!(resp.ok, json!(true));
    let user = resp.user.unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.name.as_deref(), Some("Alice"));
}

#[test]
fn login_response_user_is_optional() {
    let resp: LoginResponse = serde_json::from_value(json!({"ok": false})).unwrap();
    assert_eq!(resp.ok, json!(false));
    assert!(resp.user.is_none());
}

// =============================================================
// SubmitOutcome::from_login_result
// =============================================================

#[test]
fn network_marker_maps_to_network_error() {
    assert_eq!(SubmitOutcome::from_login_result(&json!("networkError")), SubmitOutcome::NetworkError);
}

#[test]
fn true_maps_to_success() {
    assert_eq!(SubmitOutcome::from_login_result(&json!(true)), SubmitOutcome::Success);
}

#[test]
fn falsy_values_map_to_invalid_credentials() {
    for value in [json!(false), json!(null), json!(0), json!(""), json!(0.0)] {
        assert_eq!(
            SubmitOutcome::from_login_result(&value),
            SubmitOutcome::InvalidCredentials,
            "value: {value}"
        );
    }
}

#[test]
fn other_truthy_values_map_to_success() {
    for value in [json!(1), json!("ok"), json!({"id": "u1"}), json!([])] {
        assert_eq!(SubmitOutcome::from_login_result(&value), SubmitOutcome::Success, "value: {value}");
    }
}
