use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.console, ConsoleConfig::default());
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("ADMIN_API_URL", "https://bot.example/api/"),
        ("WEATHER_API_ENDPOINT", "https://weather.example/v1/current.json"),
        ("WEATHER_TEST_CITY", " Paris "),
        ("MODAL_CLOSE_DELAY_MS", "150"),
        ("TOAST_TTL_MS", "2500"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.console.api_base_url, "https://bot.example/api");
    assert_eq!(cfg.console.weather_endpoint, "https://weather.example/v1/current.json");
    assert_eq!(cfg.console.default_test_city, "Paris");
    assert_eq!(cfg.console.modal_close_delay_ms, 150);
    assert_eq!(cfg.console.toast_ttl_ms, 2500);
}

#[test]
fn from_lookup_rejects_non_numeric_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { var: "PORT", value: "http".to_owned() });
}

#[test]
fn from_lookup_rejects_negative_delay() {
    let err = ServerConfig::from_lookup(lookup(&[("MODAL_CLOSE_DELAY_MS", "-5")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { var: "MODAL_CLOSE_DELAY_MS", .. }));
}

#[test]
fn from_lookup_rejects_blank_api_url() {
    let err = ServerConfig::from_lookup(lookup(&[("ADMIN_API_URL", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::Empty { var: "ADMIN_API_URL" });
    assert_eq!(err.to_string(), "ADMIN_API_URL must not be empty");
}

#[test]
fn from_lookup_trims_numeric_whitespace() {
    let cfg = ServerConfig::from_lookup(lookup(&[("TOAST_TTL_MS", " 1000 ")])).unwrap();
    assert_eq!(cfg.console.toast_ttl_ms, 1000);
}
