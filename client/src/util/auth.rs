//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages apply identical unauthenticated redirect behavior, and
//! the login page accepts a token handed back by the federated-login redirect.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::Session;

/// Whether a protected page should bounce to `/login`.
pub fn should_redirect_unauth(session: &Session) -> bool {
    !session.is_authenticated()
}

/// Redirect to `/login` on mount when no token is stored.
///
/// Runs as an effect so the check happens in the browser, where the token
/// store is readable, and not during server rendering.
pub fn install_unauth_redirect<F>(session: Session, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session) {
            navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}

/// Extract a usable token from the `token` query parameter of the login route.
pub fn redirect_token(raw: Option<String>) -> Option<String> {
    raw.map(|t| t.trim().to_owned()).filter(|t| !t.is_empty())
}
