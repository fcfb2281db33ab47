use super::*;

#[test]
fn default_config_points_at_local_backend() {
    let cfg = ConsoleConfig::default();
    assert_eq!(cfg.api_base_url, "http://localhost:5000/api");
    assert_eq!(cfg.weather_endpoint, "https://api.weatherapi.com/v1/current.json");
    assert_eq!(cfg.default_test_city, "London");
    assert_eq!(cfg.modal_close_delay_ms, 300);
    assert_eq!(cfg.toast_ttl_ms, 4000);
}

#[test]
fn api_url_joins_without_double_slash() {
    let cfg = ConsoleConfig { api_base_url: "https://bot.example/api/".to_owned(), ..ConsoleConfig::default() };
    assert_eq!(cfg.api_url("/users"), "https://bot.example/api/users");
}

#[test]
fn meta_content_uses_camel_case_keys() {
    let raw = ConsoleConfig::default().to_meta_content();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["apiBaseUrl"], "http://localhost:5000/api");
    assert_eq!(value["modalCloseDelayMs"], 300);
}

#[test]
fn meta_content_survives_html_attribute_roundtrip() {
    let cfg = ConsoleConfig {
        api_base_url: "https://bot.example/api".to_owned(),
        default_test_city: "Paris".to_owned(),
        ..ConsoleConfig::default()
    };
    assert_eq!(ConsoleConfig::from_meta_content(&cfg.to_meta_content()), cfg);
}

#[test]
fn malformed_meta_content_falls_back_to_defaults() {
    assert_eq!(ConsoleConfig::from_meta_content("{not json"), ConsoleConfig::default());
}

#[test]
fn from_document_is_default_outside_browser() {
    assert_eq!(ConsoleConfig::from_document(), ConsoleConfig::default());
}

#[test]
fn partial_meta_content_fills_missing_fields_with_defaults() {
    let cfg = ConsoleConfig::from_meta_content(r#"{"apiBaseUrl":"https://bot.example/api"}"#);
    assert_eq!(cfg.api_base_url, "https://bot.example/api");
    assert_eq!(cfg.weather_endpoint, DEFAULT_WEATHER_ENDPOINT);
    assert_eq!(cfg.toast_ttl_ms, DEFAULT_TOAST_TTL_MS);
}
