//! Serve command handler.

use dashgate_error::DashGateResult;
use dashgate_models::DashScopeClient;
use dashgate_server::{GatewayConfig, serve};
use std::sync::Arc;

/// Handle the `serve` command
pub async fn handle_serve_command(bind: Option<String>) -> DashGateResult<()> {
    let config = match bind {
        Some(bind_addr) => GatewayConfig::builder()
            .bind_addr(bind_addr)
            .build()
            .expect("Valid GatewayConfig"),
        None => GatewayConfig::from_env(),
    };

    let client = Arc::new(DashScopeClient::from_env()?);

    tracing::info!("Starting chat gateway");
    serve(&config, client).await
}
