use super::*;
use crate::state::session::MemoryTokenStore;

#[test]
fn should_redirect_unauth_when_token_missing() {
    let session = Session::new(MemoryTokenStore::default());
    assert!(should_redirect_unauth(&session));
}

#[test]
fn should_not_redirect_when_token_present() {
    let session = Session::new(MemoryTokenStore::with_token("tok"));
    assert!(!should_redirect_unauth(&session));
}

#[test]
fn should_redirect_again_after_sign_out() {
    let session = Session::new(MemoryTokenStore::with_token("tok"));
    session.sign_out();
    assert!(should_redirect_unauth(&session));
}

#[test]
fn redirect_token_trims_and_rejects_blank() {
    assert_eq!(redirect_token(Some(" abc ".to_owned())), Some("abc".to_owned()));
    assert_eq!(redirect_token(Some(String::new())), None);
    assert_eq!(redirect_token(None), None);
}
