//! Dashboard landing page linking to user management and settings.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated landing route after login. Logout ends the session here.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::nav_card::NavCard;
use crate::state::session::Session;
use crate::util::auth::install_unauth_redirect;

/// One navigation card on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub href: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section { href: "/users", title: "Manage Users", description: "View, block, or delete users." },
    Section { href: "/settings", title: "Settings", description: "Configure Weather APIs and bot settings." },
];

/// Dashboard page. Redirects to `/login` if no session token is stored.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    install_unauth_redirect(session.clone(), navigate.clone());

    let on_logout = move |_| {
        session.sign_out();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <h1 class="toolbar__title">"Admin Dashboard"</h1>
                <span class="toolbar__spacer"></span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>
            <main class="dashboard-page__grid">
                {SECTIONS
                    .iter()
                    .map(|s| view! { <NavCard href=s.href title=s.title description=s.description/> })
                    .collect_view()}
            </main>
        </div>
    }
}
