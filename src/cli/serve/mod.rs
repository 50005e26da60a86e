//! Serve command - runs API + form UI combined on the same port

use std::net::SocketAddr;

use axum::middleware;
use axum::response::Redirect;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};
use tracing::info;

use crate::api::middleware::{logging_middleware, security_headers_middleware};
use crate::api::state::AppState;
use crate::api::{health, router, v1};
use crate::config::AppConfig;
use crate::infrastructure::logging;

/// Run the combined API + form server
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&config.logging);

    let state = crate::create_app_state_with_config(&config)?;
    let app = create_router_with_ui(state);

    let addr = build_socket_addr(&config)?;
    info!("Starting server (API + form) on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}

/// Create router with both API and form UI endpoints
fn create_router_with_ui(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .nest("/v1", v1::create_v1_router())
        // Single-page form
        .nest_service(
            "/ui",
            ServeDir::new("public").fallback(ServeFile::new("public/index.html")),
        )
        .route("/", get(|| async { Redirect::permanent("/ui/") }))
        .fallback(router::fallback_not_found)
        .with_state(state)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(middleware::from_fn(logging_middleware))
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
