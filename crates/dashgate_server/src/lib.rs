//! HTTP gateway for the DashGate chat service.
//!
//! Exposes the chat endpoints over axum, generic over the [`ChatModel`]
//! seam so tests can substitute stub clients.
//!
//! [`ChatModel`]: dashgate_interface::ChatModel

mod api;
mod config;
mod error;
mod metrics;
mod serve;

pub use api::{
    DEFAULT_PROMPT, GatewayState, JSON_MODE_PLACEHOLDER, create_router, json_chat,
};
pub use config::{GatewayConfig, GatewayConfigBuilder};
pub use error::ApiError;
pub use metrics::{EndpointMetrics, EndpointSnapshot, MetricsCollector, MetricsSnapshot};
pub use serve::serve;
