//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toast_host::{Notifier, ToastHost};
use crate::config::{ConsoleConfig, META_NAME};
use crate::pages::{dashboard::DashboardPage, login::LoginPage, settings::SettingsPage, users::UsersPage};
use crate::state::session::Session;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Expects the deployment `ConsoleConfig` in context and embeds it for the
/// hydrate entry point.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<ConsoleConfig>().unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=META_NAME content=config.to_meta_content()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, config and toast contexts and sets up routing.
/// Unknown paths redirect to `/dashboard`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ConsoleConfig>().unwrap_or_else(ConsoleConfig::from_document);
    let toasts = RwSignal::new(ToastState::default());

    provide_context(Notifier::new(toasts, config.toast_ttl_ms));
    provide_context(toasts);
    provide_context(Session::default());
    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/weather-admin.css"/>
        <Title text="Weather Bot Admin"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/dashboard"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("users") view=UsersPage/>
                <Route path=StaticSegment("settings") view=SettingsPage/>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
