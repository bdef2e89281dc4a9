//! SUNAT RUC Lookup Service
//!
//! This library provides the core functionality for the ruc-lookup
//! service: a validating proxy in front of the apis.net.pe public RUC
//! registry, plus a bundled sample dataset for local razón-social
//! matching demos.

pub mod app_state;
pub mod config;
pub mod data;
pub mod models;
pub mod routes;
pub mod services;

use axum::response::Html;
use axum::{routing::get, Router};

use app_state::AppState;

/// Build the service router (everything except the `/metrics` scrape
/// endpoint, which carries its own state and is wired in `main`).
pub fn app(state: AppState) -> Router {
    Router::new()
        // Static UI (embedded at compile time)
        .route("/", get(|| async { Html(include_str!("../static/index.html")) }))
        // API endpoints
        .route("/health", get(routes::health::health_check))
        .route("/api/ruc", get(routes::ruc::lookup_ruc))
        .route("/api/razon-social", get(routes::search::search_razon_social))
        .with_state(state)
}
