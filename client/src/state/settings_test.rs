use super::*;

fn with_form(key: &str, city: &str) -> SettingsState {
    let mut state = SettingsState::default();
    state.loaded(Some(Settings { weather_api_key: key.to_owned(), city: city.to_owned() }));
    state
}

#[test]
fn default_state_is_loading_and_idle() {
    let state = SettingsState::default();
    assert!(state.loading);
    assert!(!state.saving);
    assert_eq!(state.key_check, KeyCheck::Idle);
}

#[test]
fn loaded_none_keeps_empty_form() {
    let mut state = SettingsState::default();
    state.loaded(None);
    assert!(!state.loading);
    assert_eq!(state.form, Settings::default());
}

#[test]
fn test_is_disabled_without_key() {
    let mut state = with_form("  ", "Paris");
    assert!(!state.can_test());
    assert!(!state.begin_test());
    assert_eq!(state.key_check, KeyCheck::Idle);
}

#[test]
fn test_is_disabled_while_in_flight() {
    let mut state = with_form("abc", "Paris");
    assert!(state.begin_test());
    assert!(state.is_testing());
    assert!(!state.can_test());
    assert!(!state.begin_test());
}

#[test]
fn failed_test_shows_modal_with_error_text() {
    let mut state = with_form("bad", "Paris");
    state.begin_test();
    state.finish_test(TestResult::failure("Invalid API Key or request failed"));
    let result = state.modal_result().unwrap();
    assert!(!result.success);
    assert_eq!(result.message, "Invalid API Key or request failed");
    assert!(!state.is_closing());
}

#[test]
fn finish_test_outside_testing_is_ignored() {
    let mut state = with_form("abc", "Paris");
    state.finish_test(TestResult::success("late"));
    assert_eq!(state.key_check, KeyCheck::Idle);
}

#[test]
fn dismiss_passes_through_closing_then_idle() {
    let mut state = with_form("abc", "Paris");
    state.begin_test();
    state.finish_test(TestResult::success("Paris: 18°C, Sunny"));

    assert!(state.begin_close());
    assert!(state.is_closing());
    assert_eq!(state.modal_result().map(|r| r.message.as_str()), Some("Paris: 18°C, Sunny"));

    state.finish_close();
    assert_eq!(state.key_check, KeyCheck::Idle);
    assert!(state.modal_result().is_none());
}

#[test]
fn second_dismiss_while_closing_is_ignored() {
    let mut state = with_form("abc", "Paris");
    state.begin_test();
    state.finish_test(TestResult::failure("x"));
    assert!(state.begin_close());
    assert!(!state.begin_close());
    assert!(state.is_closing());
}

#[test]
fn modal_lifecycle_leaves_form_untouched() {
    let mut state = with_form("abc", "Paris");
    let form = state.form.clone();
    state.begin_test();
    state.finish_test(TestResult::failure("x"));
    state.begin_close();
    state.finish_close();
    assert_eq!(state.form, form);
}

#[test]
fn begin_close_without_result_is_refused() {
    let mut state = with_form("abc", "Paris");
    assert!(!state.begin_close());
    state.begin_test();
    assert!(!state.begin_close());
    assert!(state.is_testing());
}

#[test]
fn save_guard_blocks_duplicate_submissions() {
    let mut state = with_form("abc", "Paris");
    assert!(state.begin_save());
    assert!(!state.begin_save());
    state.finish_save();
    assert!(state.begin_save());
}
