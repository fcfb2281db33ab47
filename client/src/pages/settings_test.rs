use super::*;

#[test]
fn edit_field_updates_only_the_addressed_field() {
    let mut form = Settings { weather_api_key: "old".to_owned(), city: "Paris".to_owned() };
    edit_field(&mut form, SettingsField::WeatherApiKey, "abc".to_owned());
    assert_eq!(form, Settings { weather_api_key: "abc".to_owned(), city: "Paris".to_owned() });
    edit_field(&mut form, SettingsField::City, "Oslo".to_owned());
    assert_eq!(form.city, "Oslo");
    assert_eq!(form.weather_api_key, "abc");
}

#[test]
fn test_button_label_tracks_in_flight_test() {
    let mut state = SettingsState::default();
    state.loaded(Some(Settings { weather_api_key: "abc".to_owned(), city: String::new() }));
    assert_eq!(test_button_label(&state), "Test Key");
    state.begin_test();
    assert_eq!(test_button_label(&state), "Testing...");
}

#[test]
fn edited_form_is_the_exact_save_payload() {
    let mut state = SettingsState::default();
    state.loaded(None);
    edit_field(&mut state.form, SettingsField::WeatherApiKey, "abc".to_owned());
    edit_field(&mut state.form, SettingsField::City, "Paris".to_owned());
    assert_eq!(
        serde_json::to_value(&state.form).unwrap(),
        serde_json::json!({ "weatherApiKey": "abc", "city": "Paris" })
    );
}

#[test]
fn save_messages() {
    assert_eq!(SAVE_SUCCESS, "Settings updated!");
    assert_eq!(SAVE_FAILURE, "Failed to update settings.");
}
