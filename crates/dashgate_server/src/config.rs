//! Configuration for the gateway listener.

use derive_getters::Getters;

/// Configuration for the gateway listener.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GatewayConfig {
    /// Address the gateway binds to (e.g., "0.0.0.0:8080")
    bind_addr: String,
}

impl GatewayConfig {
    /// Creates a builder for GatewayConfig.
    pub fn builder() -> GatewayConfigBuilder {
        GatewayConfigBuilder::default()
    }

    /// Create config from environment variables
    ///
    /// Reads:
    /// - `GATEWAY_BIND_ADDR` (default: "0.0.0.0:8080")
    pub fn from_env() -> Self {
        let bind_addr =
            std::env::var("GATEWAY_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        GatewayConfigBuilder::default()
            .bind_addr(bind_addr)
            .build()
            .expect("Valid GatewayConfig")
    }
}
