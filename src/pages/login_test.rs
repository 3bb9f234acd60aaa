use futures::executor::block_on;

use super::*;
use crate::net::testing::FakeTransport;

fn login_json() -> serde_json::Value {
    serde_json::json!({
        "id": "0b7f3c1e-5d2a-4b8e-8f9a-7c6d5e4f3a21",
        "username": "ana",
        "token": "tok",
        "expires_at": 1_700_000_000_u64,
        "manager_of": [],
        "chair_of": [],
        "board_of": [],
        "member_of": []
    })
}

#[test]
fn validate_login_trims_email() {
    assert_eq!(
        validate_login("  ana@example.com ", "pw"),
        Ok(LoginRequest {
            email: "ana@example.com".to_owned(),
            password: "pw".to_owned(),
        })
    );
}

#[test]
fn validate_login_requires_both_fields() {
    assert!(validate_login("", "pw").is_err());
    assert!(validate_login("ana@example.com", "").is_err());
    assert!(validate_login("   ", "pw").is_err());
}

#[test]
fn successful_login_stores_session() {
    let fake = FakeTransport::new().ok_json(&login_json());
    let store = SessionStore::new();
    block_on(submit_login(&fake.client(), &store, "ana@example.com", "pw")).unwrap();

    let session = store.read();
    assert_eq!(session.username.as_deref(), Some("ana"));
    assert_eq!(session.token(), Some("tok"));
    assert!(session.user_id.is_some());
}

#[test]
fn rejected_login_leaves_session_anonymous() {
    let fake = FakeTransport::new().status(401);
    let store = SessionStore::new();
    let err = block_on(submit_login(&fake.client(), &store, "ana@example.com", "bad")).unwrap_err();

    assert_eq!(store.read(), Session::anonymous());
    assert_eq!(login_error_message(&err), "Correo o contraseña incorrectos.");
}

#[test]
fn blank_form_sends_nothing() {
    let fake = FakeTransport::new();
    let store = SessionStore::new();
    let err = block_on(submit_login(&fake.client(), &store, "", "")).unwrap_err();

    assert!(fake.requests().is_empty());
    assert_eq!(login_error_message(&err), MISSING_FIELDS);
}

#[test]
fn malformed_login_response_is_generic_failure() {
    let fake = FakeTransport::new().ok(r#"{"token": "tok"}"#);
    let store = SessionStore::new();
    let err = block_on(submit_login(&fake.client(), &store, "ana@example.com", "pw")).unwrap_err();

    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(login_error_message(&err), "No se pudo iniciar sesión.");
    assert_eq!(store.read(), Session::anonymous());
}
