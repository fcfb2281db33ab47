use super::*;

#[test]
fn user_deserializes_backend_document_shape() {
    let raw = r#"{"_id":"64f0","telegramId":"123456","subscribed":true,"blocked":false,"__v":0}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(
        user,
        User { id: "64f0".to_owned(), telegram_id: "123456".to_owned(), subscribed: true, blocked: false }
    );
}

#[test]
fn user_accepts_plain_id_and_numeric_telegram_id() {
    let raw = r#"{"id":"u1","telegramId":987654321,"blocked":true}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(user.telegram_id, "987654321");
    assert!(!user.subscribed);
    assert!(user.blocked);
}

#[test]
fn user_rejects_object_telegram_id() {
    let raw = r#"{"_id":"u1","telegramId":{"x":1}}"#;
    assert!(serde_json::from_str::<User>(raw).is_err());
}

#[test]
fn settings_serialize_to_backend_keys() {
    let settings = Settings { weather_api_key: "abc".to_owned(), city: "Paris".to_owned() };
    assert_eq!(
        serde_json::to_value(&settings).unwrap(),
        serde_json::json!({ "weatherApiKey": "abc", "city": "Paris" })
    );
}

#[test]
fn settings_missing_fields_default_to_empty() {
    let settings: Settings = serde_json::from_str(r#"{"city":"Oslo"}"#).unwrap();
    assert_eq!(settings.weather_api_key, "");
    assert_eq!(settings.city, "Oslo");
}

#[test]
fn login_response_reads_token_or_error() {
    let ok: LoginResponse = serde_json::from_str(r#"{"token":"t-1"}"#).unwrap();
    assert_eq!(ok.token.as_deref(), Some("t-1"));
    let err: LoginResponse = serde_json::from_str(r#"{"error":"Invalid credentials"}"#).unwrap();
    assert_eq!(err.token, None);
    assert_eq!(err.error.as_deref(), Some("Invalid credentials"));
}

#[test]
fn weather_report_summary_formats_location_temperature_condition() {
    let raw = r#"{
        "location": {"name": "Paris", "country": "France"},
        "current": {"temp_c": 18.5, "condition": {"text": "Partly cloudy", "code": 1003}}
    }"#;
    let report: WeatherReport = serde_json::from_str(raw).unwrap();
    assert_eq!(report.summary(), "Paris: 18.5°C, Partly cloudy");
}

#[test]
fn test_result_titles() {
    assert_eq!(TestResult::success("ok").title(), "Test Successful");
    assert_eq!(TestResult::failure("bad").title(), "Test Failed");
}
