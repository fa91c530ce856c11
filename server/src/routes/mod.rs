//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only ever talks to this host. It gets the widget page
//! (rendered server-side, then hydrated), the compiled bundle under `/pkg`,
//! and the two backend calls, which are relayed as-is by `proxy`.


use std::path::PathBuf;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::Response;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use faq_widget::app::{App, shell};
use faq_widget::net::api::{CHAT_ENDPOINT, RESET_ENDPOINT};

use crate::proxy::ProxyError;
use crate::state::AppState;

/// Backend pass-through routes the widget calls.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(CHAT_ENDPOINT, post(chat))
        .route(RESET_ENDPOINT, post(reset))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn chat(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Result<Response, ProxyError> {
    state.upstream.forward(CHAT_ENDPOINT, &headers, body).await
}

async fn reset(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Result<Response, ProxyError> {
    state.upstream.forward(RESET_ENDPOINT, &headers, body).await
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Host router: `/chat` and `/reset` pass-through, the server-rendered
/// widget page, and the `/pkg` bundle.
///
/// # Errors
///
/// Fails when cargo-leptos settings (site root, output name) cannot be read
/// from the environment or `server/Cargo.toml`.
pub fn app(state: AppState) -> Result<Router, String> {
    let options = get_configuration(None)
        .map_err(|e| format!("leptos configuration: {e}"))?
        .leptos_options;
    let bundle_dir = PathBuf::from(options.site_root.as_ref()).join("pkg");

    Ok(api_routes(state)
        .merge(widget_routes(options))
        .nest_service("/pkg", ServeDir::new(bundle_dir))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Server-rendered widget page.
fn widget_routes(options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let shell_options = options.clone();
    Router::new()
        .leptos_routes(&options, routes, move || shell(shell_options.clone()))
        .with_state(options)
}
