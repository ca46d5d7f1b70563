//! Registry Portal Kernel
//!
//! HTTP server fronting the plugin-registry portal: navigation, crawler
//! metadata, and the registry API client.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use portal_kernel::config::Config;
use portal_kernel::state::AppState;
use portal_kernel::{instrument, nav, routes};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Swap the console logging surface before anything else logs.
    // Only the primary server runtime installs the override.
    let runtime = instrument::runtime_from_env();
    instrument::install(&runtime).context("failed to install instrumentation")?;

    info!("Starting registry portal kernel");

    // Load configuration from environment
    let config = Config::from_env().context("failed to load configuration")?;
    info!(port = config.port, app_url = %config.app_url, "Configuration loaded");

    // Initialize application state (menu, registry client)
    let state = AppState::new(config.clone(), nav::base_navigation())
        .context("failed to initialize application state")?;

    info!(
        menu_entries = state.nav().nav_main.len(),
        registry_url = state.registry().base_url(),
        "Navigation and registry client ready"
    );

    // Build CORS layer from config
    let cors = build_cors_layer(&config);

    // Build the router
    let app = routes::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind to address")?;

    info!(%addr, "Server listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

fn build_cors_layer(config: &Config) -> CorsLayer {
    let methods = [Method::GET, Method::OPTIONS];

    if config.cors_allowed_origins.len() == 1 && config.cors_allowed_origins[0] == "*" {
        CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_allowed_origins
            .iter()
            .filter_map(|o| match o.parse::<HeaderValue>() {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring unparseable CORS origin");
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers(tower_http::cors::Any)
            .allow_credentials(true)
    }
}
