//! Dashboard navigation card.

use leptos::prelude::*;

/// A clickable card linking to one console section.
#[component]
pub fn NavCard(href: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <a class="nav-card" href=href>
            <span class="nav-card__title">{title}</span>
            <span class="nav-card__description">{description}</span>
        </a>
    }
}
