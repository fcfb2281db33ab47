use super::*;
use crate::state::session::{MemoryTokenStore, TokenStore};

#[test]
fn validate_login_input_trims_email_and_keeps_password() {
    assert_eq!(
        validate_login_input("  admin@example.com ", " s3cret "),
        Ok(Credentials { email: "admin@example.com".to_owned(), password: " s3cret ".to_owned() })
    );
}

#[test]
fn validate_login_input_reports_missing_email() {
    assert_eq!(
        validate_login_input("   ", "pw"),
        Err(LoginFieldErrors { email: Some("Email is required"), password: None })
    );
}

#[test]
fn validate_login_input_reports_missing_password() {
    assert_eq!(
        validate_login_input("a@b.com", ""),
        Err(LoginFieldErrors { email: None, password: Some("Password is required") })
    );
}

#[test]
fn validate_login_input_reports_both_fields() {
    assert_eq!(
        validate_login_input("", ""),
        Err(LoginFieldErrors { email: Some(EMAIL_REQUIRED), password: Some(PASSWORD_REQUIRED) })
    );
}

#[test]
fn login_error_message_prefers_backend_text() {
    let err = ApiError::rejected(401, Some("Invalid credentials".to_owned()), "Login failed");
    assert_eq!(login_error_message(&err), "Invalid credentials");
}

#[test]
fn login_error_message_falls_back_when_backend_is_silent() {
    let err = ApiError::rejected(500, None, "Login failed");
    assert_eq!(login_error_message(&err), "Login failed");
}

#[test]
fn login_error_message_is_generic_for_transport_failures() {
    assert_eq!(login_error_message(&ApiError::Network("offline".to_owned())), "Network error");
    assert_eq!(login_error_message(&ApiError::Decode("eof".to_owned())), "Network error");
}

#[test]
fn accept_token_stores_token_and_lands_on_dashboard() {
    let store = MemoryTokenStore::default();
    let session = Session::new(store.clone());
    assert_eq!(accept_token(&session, "jwt.from.redirect"), Some("/dashboard"));
    assert_eq!(store.load().as_deref(), Some("jwt.from.redirect"));
    assert!(session.is_authenticated());
}

#[test]
fn accept_token_ignores_blank_token() {
    let store = MemoryTokenStore::default();
    let session = Session::new(store.clone());
    assert_eq!(accept_token(&session, "  "), None);
    assert_eq!(store.load(), None);
    assert!(!session.is_authenticated());
}

#[test]
fn accept_token_after_redirect_query() {
    let session = Session::new(MemoryTokenStore::with_token("stale"));
    let token = redirect_token(Some(" fresh ".to_owned())).unwrap();
    assert_eq!(accept_token(&session, &token), Some("/dashboard"));
    assert_eq!(session.token().as_deref(), Some("fresh"));
}
