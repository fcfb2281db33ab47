//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Serves the Leptos admin console (SSR + hydration) with the deployment
//! `ConsoleConfig` in context, its static bundle under `/pkg`, and a health
//! probe. The bot backend is a separate service; the browser calls it
//! directly, so nothing here proxies `/users` or `/settings` API traffic.


use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Landing route for `/` and any path the console does not know.
pub const HOME_PATH: &str = "/dashboard";

/// Console router: Leptos pages + static assets + `/healthz`.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(admin_client::app::App);
    tracing::debug!(count = routes.len(), "console routes registered");

    let console = config.console.clone();
    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            move || provide_context(console.clone()),
            {
                let opts = leptos_options.clone();
                move || admin_client::app::shell(opts.clone())
            },
        )
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback(redirect_home)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn redirect_home() -> Redirect {
    Redirect::temporary(HOME_PATH)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
