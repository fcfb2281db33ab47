//! Bot settings page: weather API key and city, with a live key test.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loads `/settings` on mount and renders a skeleton until it resolves. Save
//! sends the whole form. "Test Key" queries the weather endpoint directly
//! from the browser and shows the outcome in `KeyTestModal`; dismissing the
//! modal runs a two-phase close so its exit transition can play.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::key_test_modal::KeyTestModal;
use crate::components::page_header::PageHeader;
use crate::components::skeleton::SkeletonForm;
use crate::components::toast_host::Notifier;
use crate::config::ConsoleConfig;
use crate::net::types::Settings;
use crate::state::session::Session;
use crate::state::settings::SettingsState;
use crate::util::auth::install_unauth_redirect;

pub const SAVE_SUCCESS: &str = "Settings updated!";
pub const SAVE_FAILURE: &str = "Failed to update settings.";

/// Form field addressed by an input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsField {
    WeatherApiKey,
    City,
}

/// Apply one input edit to the form.
pub fn edit_field(form: &mut Settings, field: SettingsField, value: String) {
    match field {
        SettingsField::WeatherApiKey => form.weather_api_key = value,
        SettingsField::City => form.city = value,
    }
}

/// Label for the "Test Key" button.
pub fn test_button_label(state: &SettingsState) -> &'static str {
    if state.is_testing() { "Testing..." } else { "Test Key" }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<Session>();
    install_unauth_redirect(session.clone(), use_navigate());
    let session = StoredValue::new(session);
    let config = StoredValue::new(expect_context::<ConsoleConfig>());
    let notifier = expect_context::<Notifier>();
    let state = RwSignal::new(SettingsState::default());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let Some(token) = session.get_value().token() else {
            return;
        };
        match crate::net::api::fetch_settings(&config.get_value(), &token).await {
            Ok(settings) => state.update(|s| s.loaded(Some(settings))),
            Err(e) => {
                leptos::logging::warn!("settings fetch failed: {e}");
                state.update(|s| s.loaded(None));
            }
        }
    });

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut accepted = false;
        state.update(|s| accepted = s.begin_save());
        if !accepted {
            return;
        }
        let form = state.get_untracked().form;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let token = session.get_value().token().unwrap_or_default();
            match crate::net::api::save_settings(&config.get_value(), &token, &form).await {
                Ok(()) => notifier.success(SAVE_SUCCESS),
                Err(e) => {
                    leptos::logging::warn!("settings save failed: {e}");
                    notifier.error(SAVE_FAILURE);
                }
            }
            state.update(SettingsState::finish_save);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (form, session, config, notifier);
            state.update(SettingsState::finish_save);
        }
    };

    let on_test = move |_| {
        let mut accepted = false;
        state.update(|s| accepted = s.begin_test());
        if !accepted {
            return;
        }
        let form = state.get_untracked().form;

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::test_weather_key(&config.get_value(), &form.weather_api_key, &form.city).await;
            if !result.success {
                leptos::logging::warn!("weather key test failed: {}", result.message);
            }
            state.update(|s| s.finish_test(result));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let result = crate::net::types::TestResult::failure("not available on server");
            let _ = form;
            state.update(|s| s.finish_test(result));
        }
    };

    let on_dismiss = Callback::new(move |()| {
        let mut accepted = false;
        state.update(|s| accepted = s.begin_close());
        if !accepted {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let delay = std::time::Duration::from_millis(config.get_value().modal_close_delay_ms);
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(delay).await;
                state.update(SettingsState::finish_close);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        state.update(SettingsState::finish_close);
    });

    let closing = Signal::derive(move || state.get().is_closing());
    // Unchanged across Shown -> Closing, so the overlay stays mounted while closing.
    let modal_result = Memo::new(move |_| state.get().modal_result().cloned());

    view! {
        <div class="settings-page">
            <Show when=move || !state.get().loading fallback=|| view! { <SkeletonForm fields=3/> }>
                <div class="settings-page__card">
                    <PageHeader title="Bot Settings"/>
                    <form class="settings-form" on:submit=on_save>
                        <label class="settings-form__label">
                            "Weather API Key"
                        </label>
                        <div class="settings-form__key-row">
                            <input
                                id="weather-api-key"
                                class="settings-form__input"
                                type="text"
                                name="weatherApiKey"
                                placeholder="Enter WeatherAPI.com key"
                                required
                                prop:value=move || state.get().form.weather_api_key
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    state.update(|s| edit_field(&mut s.form, SettingsField::WeatherApiKey, value));
                                }
                            />
                            <button
                                class="btn settings-form__test"
                                type="button"
                                disabled=move || !state.get().can_test()
                                on:click=on_test
                            >
                                {move || test_button_label(&state.get())}
                            </button>
                        </div>
                        <label class="settings-form__label">
                            "City Name (for weather updates)"
                        </label>
                        <input
                            id="city"
                            class="settings-form__input"
                            type="text"
                            name="city"
                            placeholder="e.g. London, New York, Mumbai"
                            prop:value=move || state.get().form.city
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                state.update(|s| edit_field(&mut s.form, SettingsField::City, value));
                            }
                        />
                        <button class="btn btn--primary settings-form__save" type="submit" disabled=move || state.get().saving>
                            "Save Settings"
                        </button>
                    </form>
                </div>
                {move || {
                    modal_result
                        .get()
                        .map(|result| view! { <KeyTestModal result=result closing=closing on_dismiss=on_dismiss/> })
                }}
            </Show>
        </div>
    }
}
