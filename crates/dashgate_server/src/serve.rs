//! Gateway serve loop.

use crate::api::create_router;
use crate::config::GatewayConfig;
use crate::metrics::MetricsCollector;
use dashgate_error::{DashGateResult, ServerError};
use dashgate_interface::ChatModel;
use std::sync::Arc;
use tracing::{info, instrument};

/// Binds the listener and serves the gateway until shutdown.
///
/// Requests are dispatched concurrently on the tokio runtime; the gateway
/// itself holds no shared mutable state beyond atomic counters, so
/// concurrency is bounded only by the upstream client.
#[instrument(skip(model))]
pub async fn serve<M>(config: &GatewayConfig, model: Arc<M>) -> DashGateResult<()>
where
    M: ChatModel + 'static,
{
    let metrics = Arc::new(MetricsCollector::new());
    let app = create_router(model, metrics);

    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(|e| {
            ServerError::new(format!("Failed to bind {}: {}", config.bind_addr(), e))
        })?;

    info!(addr = %config.bind_addr(), "Gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(format!("Server error: {}", e)))?;

    info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    info!("Shutdown signal received");
}
