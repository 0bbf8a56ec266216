//! Web server bootstrap: middleware stack, listener, graceful shutdown

use std::{sync::Arc, time::Duration};

use anyhow::Context;
use axum::Router;
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
};
use tracing::info;

use crate::{api, catalog::TravelCatalog, config::EcoTravelConfig};

/// Assemble the API router and its middleware stack.
///
/// CORS sits outermost so that responses generated by the guard-rail
/// layers beneath it (timeout, body limit) still carry CORS headers.
fn app(config: &EcoTravelConfig, catalog: Arc<TravelCatalog>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::router(catalog)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.limits.request_timeout_secs,
        )))
        .layer(RequestBodyLimitLayer::new(config.limits.body_limit_bytes))
        .layer(cors)
}

/// Serve the API until Ctrl+C or SIGTERM.
pub async fn run(config: &EcoTravelConfig, catalog: Arc<TravelCatalog>) -> anyhow::Result<()> {
    let app = app(config, catalog);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Web server running at http://{address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
