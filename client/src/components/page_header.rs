//! Header bar for the users and settings pages.

use leptos::prelude::*;

/// Back link to the dashboard followed by the page title.
#[component]
pub fn PageHeader(title: &'static str) -> impl IntoView {
    view! {
        <header class="page-header">
            <a class="btn page-header__back" href="/dashboard">
                "← Back"
            </a>
            <h2 class="page-header__title">{title}</h2>
        </header>
    }
}
