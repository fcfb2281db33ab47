//! # admin-client
//!
//! Leptos + WASM admin console for the weather notification bot.
//!
//! This crate contains the pages, components, client state and REST helpers.
//! It is compiled with `ssr` for the server render and with `hydrate` for the
//! browser bundle; browser-only calls compile to no-ops under `ssr`.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use leptos::prelude::*;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let config = config::ConsoleConfig::from_document();
    log::info!("hydrating admin console, api={}", config.api_base_url);
    leptos::mount::hydrate_body(move || {
        provide_context(config);
        view! { <app::App/> }
    });
}
