use axum::routing::get;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use ruc_lookup::app_state::AppState;
use ruc_lookup::config::AppConfig;
use ruc_lookup::routes;
use ruc_lookup::services::{cache::ResponseCache, sunat::SunatClient};

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    // Load configuration from environment
    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing ruc-lookup server");

    // Initialize Prometheus metrics recorder
    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    // Register application metrics
    metrics::describe_counter!("ruc_lookups_total", "Total RUC lookup requests received");
    metrics::describe_counter!(
        "ruc_lookups_invalid_total",
        "Lookup requests rejected before any upstream call"
    );
    metrics::describe_counter!(
        "ruc_lookup_upstream_errors_total",
        "Lookup requests that failed against the upstream registry"
    );
    metrics::describe_counter!(
        "ruc_cache_hits_total",
        "Lookups served from the upstream response cache"
    );

    // Initialize upstream registry client
    tracing::info!(base_url = %config.ruc_api_base, "Initializing registry client");
    let sunat =
        SunatClient::new(&config.ruc_api_base).expect("Failed to initialize registry client");

    let cache = ResponseCache::new(Duration::from_secs(config.ruc_cache_ttl_secs));

    // Create shared application state
    let state = AppState::new(sunat, cache);

    // Build API routes
    let app = ruc_lookup::app(state)
        // Prometheus metrics endpoint (separate state)
        .route(
            "/metrics",
            get(routes::metrics::prometheus_metrics).with_state(prometheus_handle),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive());

    tracing::info!("Starting ruc-lookup on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
