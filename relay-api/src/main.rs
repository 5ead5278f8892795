//! Relay API - HTTP receiver publishing messages durably to RabbitMQ.
//!
//! This binary provides a thin, fast web server that:
//! - Accepts message submissions as JSON
//! - Validates and publishes them to a durable queue
//! - Returns an explicit success or failure to the caller
//!
//! The broker connection is established eagerly at startup; the
//! process refuses to serve requests without a working publisher.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use tokio::{net::TcpListener, signal};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use relay::web::{health, post_message, AppState};
use relay::{Config, MessageService, Publisher, RabbitMqPublisher};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize structured JSON logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().flatten_event(true))
        .init();

    info!("relay_api_starting");

    // Load configuration
    let config = Config::from_env();
    info!(
        port = config.port,
        rabbitmq_url_set = !config.rabbitmq_url.is_empty(),
        "config_loaded"
    );

    // Open the RabbitMQ publisher; a broker we cannot reach at startup
    // is fatal.
    let publisher = Arc::new(
        RabbitMqPublisher::open(&config.rabbitmq_url)
            .await
            .context("Failed to initialize RabbitMQ publisher")?,
    );

    // Create the message service with the shared publisher
    let service = MessageService::new(publisher.clone());
    let state = AppState::new(service);

    // Permissive CORS for browser clients
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    // Build the router
    let app = Router::new()
        .route("/health", get(health))
        .route("/messages", post(post_message))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    // Bind to address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    info!(address = %addr, "relay_api_listening");

    // Run server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // Release the broker connection; a failure here is reported but
    // never blocks exit, and a hung close is abandoned after a bounded
    // window.
    match tokio::time::timeout(Duration::from_secs(5), publisher.close()).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => warn!(error = %err, "rabbitmq_close_error"),
        Err(_) => warn!("rabbitmq_close_timeout"),
    }

    info!("relay_api_shutdown_complete");

    Ok(())
}

/// Create a future that completes when a shutdown signal is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received SIGINT"),
        _ = terminate => info!("Received SIGTERM"),
    }

    info!("relay_api_shutting_down");
}
