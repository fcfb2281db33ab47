use super::*;

#[test]
fn rejected_keeps_backend_message() {
    let err = ApiError::rejected(401, Some("Invalid credentials".to_owned()), "Login failed");
    assert_eq!(err.to_string(), "Invalid credentials");
    assert!(err.is_rejection());
}

#[test]
fn rejected_without_message_uses_fallback() {
    let err = ApiError::rejected(500, None, "request failed");
    assert_eq!(err, ApiError::Rejected { status: 500, message: "request failed".to_owned() });
}

#[test]
fn rejected_blank_message_uses_fallback() {
    let err = ApiError::rejected(403, Some("   ".to_owned()), "request failed");
    assert_eq!(err.to_string(), "request failed");
}

#[test]
fn network_and_decode_are_not_rejections() {
    assert!(!ApiError::Network("offline".to_owned()).is_rejection());
    assert!(!ApiError::Decode("eof".to_owned()).is_rejection());
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
}
