//! HTTP render service using axum

use anyhow::{Context, Result};
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use jl_core::ServerConfig;
use jl_jinja::{example_catalog, filter_catalog, handle_payload};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;

use crate::cli::{GlobalArgs, ServeArgs};
use crate::commands::common::{init_logging, load_config};

/// Pre-serialized catalogs shared across all handlers
pub(crate) struct AppState {
    /// `GET /filters` body
    filters_json: String,
    /// `GET /examples` body
    examples_json: String,
}

impl AppState {
    pub(crate) fn build() -> Result<Self> {
        Ok(Self {
            filters_json: serde_json::to_string(filter_catalog())
                .context("Failed to serialize filter catalog")?,
            examples_json: serde_json::to_string(example_catalog())
                .context("Failed to serialize example catalog")?,
        })
    }
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, global: &GlobalArgs) -> Result<()> {
    let mut config = load_config(global)?;
    if let Some(host) = &args.host {
        config.host = host.clone();
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    init_logging(global.verbose || config.debug);

    let app = build_router(&config)?;
    let addr = config.bind_addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    log::info!("Serving jinjalab at http://{}", addr);
    println!("Press Ctrl+C to stop.\n");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    Ok(())
}

/// Build the application router
pub(crate) fn build_router(config: &ServerConfig) -> Result<Router> {
    let state = Arc::new(AppState::build()?);

    Ok(Router::new()
        .route("/render", post(post_render))
        .route("/filters", get(get_filters))
        .route("/examples", get(get_examples))
        .route("/health", get(get_health))
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(CorsLayer::permissive()))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::warn!("Failed to listen for Ctrl+C: {}", err);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}

/// POST /render
async fn post_render(body: Bytes) -> impl IntoResponse {
    let response = handle_payload(&body);
    let status = StatusCode::from_u16(response.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
    if response.is_success() {
        log::debug!("POST /render -> {}", status);
    } else {
        log::debug!(
            "POST /render -> {}: {}",
            status,
            response.message.as_deref().unwrap_or_default()
        );
    }
    (status, Json(response))
}

/// GET /filters
async fn get_filters(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        state.filters_json.clone(),
    )
}

/// GET /examples
async fn get_examples(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/json")],
        state.examples_json.clone(),
    )
}

/// GET /health
async fn get_health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
#[path = "serve_test.rs"]
mod tests;
