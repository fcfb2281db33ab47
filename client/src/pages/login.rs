//! Login page supporting email + password and Google sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only page that writes the session token. A direct login posts
//! credentials to the backend; the Google path leaves for the backend's
//! authorization URL and comes back here with `?token=...`, which is stored
//! the same way.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use crate::config::ConsoleConfig;
use crate::net::error::ApiError;
use crate::net::types::Credentials;
use crate::state::session::Session;
use crate::util::auth::redirect_token;

pub const EMAIL_REQUIRED: &str = "Email is required";
pub const PASSWORD_REQUIRED: &str = "Password is required";
const LANDING_PATH: &str = "/dashboard";

/// Inline per-field validation messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoginFieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

/// Check both required fields before anything is sent.
///
/// # Errors
///
/// Returns the per-field messages when either field is blank.
pub fn validate_login_input(email: &str, password: &str) -> Result<Credentials, LoginFieldErrors> {
    let email = email.trim();
    let errors = LoginFieldErrors {
        email: email.is_empty().then_some(EMAIL_REQUIRED),
        password: password.is_empty().then_some(PASSWORD_REQUIRED),
    };
    if errors == LoginFieldErrors::default() {
        Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}

/// Text shown under the form when a login attempt fails.
pub fn login_error_message(err: &ApiError) -> String {
    if err.is_rejection() { err.to_string() } else { "Network error".to_owned() }
}

/// Store a freshly issued token and return where to go next.
///
/// `None` means the token was blank and the session is unchanged.
pub fn accept_token(session: &Session, token: &str) -> Option<&'static str> {
    session.sign_in(token).ok().map(|()| LANDING_PATH)
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = StoredValue::new(expect_context::<ConsoleConfig>());
    let session = StoredValue::new(expect_context::<Session>());
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let field_errors = RwSignal::new(LoginFieldErrors::default());
    let error_msg = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Federated-login return: `/login?token=...`.
    let navigate_redirect = navigate.clone();
    Effect::new(move || {
        let Some(token) = redirect_token(query.read().get("token")) else {
            return;
        };
        if let Some(path) = accept_token(&session.get_value(), &token) {
            navigate_redirect(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error_msg.set(String::new());
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => {
                field_errors.set(LoginFieldErrors::default());
                credentials
            }
            Err(errors) => {
                field_errors.set(errors);
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&config.get_value(), &credentials).await;
                match result {
                    Ok(token) => match accept_token(&session.get_value(), &token) {
                        Some(path) => navigate(path, NavigateOptions::default()),
                        None => error_msg.set(crate::net::api::LOGIN_FAILED.to_owned()),
                    },
                    Err(e) => {
                        leptos::logging::warn!("login failed: {e}");
                        error_msg.set(login_error_message(&e));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credentials, &navigate, config);
        }
    };

    let on_google = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let url = crate::net::api::google_login_url(&config.get_value());
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(&url);
            }
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2 class="login-card__title">"Admin Login"</h2>
                <form class="login-form" on:submit=on_submit novalidate>
                    <div class="login-field">
                        <input
                            class="login-input"
                            class:login-input--invalid=move || field_errors.get().email.is_some()
                            type="email"
                            placeholder="Email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <Show when=move || field_errors.get().email.is_some()>
                            <p class="login-field__error">{move || field_errors.get().email.unwrap_or_default()}</p>
                        </Show>
                    </div>
                    <div class="login-field">
                        <input
                            class="login-input"
                            class:login-input--invalid=move || field_errors.get().password.is_some()
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <Show when=move || field_errors.get().password.is_some()>
                            <p class="login-field__error">
                                {move || field_errors.get().password.unwrap_or_default()}
                            </p>
                        </Show>
                    </div>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>
                <div class="login-divider">
                    <span>"or"</span>
                </div>
                <button class="login-button login-button--google" on:click=on_google disabled=move || busy.get()>
                    "Login with Google"
                </button>
                <Show when=move || !error_msg.get().is_empty()>
                    <p class="login-message">{move || error_msg.get()}</p>
                </Show>
            </div>
        </div>
    }
}
