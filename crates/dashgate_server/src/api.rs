//! HTTP API for the chat gateway.

use crate::error::ApiError;
use crate::metrics::MetricsCollector;
use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use dashgate_core::{GenerationOptions, Prompt};
use dashgate_error::ServerError;
use dashgate_interface::ChatModel;
use futures_util::StreamExt;
use serde_json::json;
use std::sync::Arc;
use tracing::instrument;

/// Fixed prompt forwarded by every chat endpoint.
pub const DEFAULT_PROMPT: &str = "你好，介绍下你自己吧。";

/// Placeholder reply for the unreleased JSON mode.
pub const JSON_MODE_PLACEHOLDER: &str = "包含此功能的版本暂未发布！";

/// Gateway state shared across handlers.
pub struct GatewayState<M> {
    /// Chat model client.
    pub model: Arc<M>,
    /// Request metrics.
    pub metrics: Arc<MetricsCollector>,
}

impl<M> GatewayState<M> {
    /// Creates a new gateway state.
    pub fn new(model: Arc<M>, metrics: Arc<MetricsCollector>) -> Self {
        Self { model, metrics }
    }
}

impl<M> Clone for GatewayState<M> {
    fn clone(&self) -> Self {
        Self {
            model: Arc::clone(&self.model),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

/// Creates the gateway router.
pub fn create_router<M>(model: Arc<M>, metrics: Arc<MetricsCollector>) -> Router
where
    M: ChatModel + 'static,
{
    let state = GatewayState::new(model, metrics);

    Router::new()
        .route("/dashscope/chat-model/simple/chat", get(simple_chat::<M>))
        .route("/dashscope/chat-model/stream/chat", get(stream_chat::<M>))
        .route("/dashscope/chat-model/custom/chat", get(custom_chat::<M>))
        .route("/health", get(health_check))
        .route("/metrics", get(get_metrics::<M>))
        .with_state(state)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Get request counters in JSON format.
#[instrument(skip_all)]
async fn get_metrics<M>(State(state): State<GatewayState<M>>) -> impl IntoResponse
where
    M: ChatModel + 'static,
{
    (StatusCode::OK, Json(state.metrics.snapshot()))
}

/// Forward the fixed prompt and return the complete reply text.
///
/// No options are attached; the client's configured defaults apply.
#[instrument(skip_all)]
async fn simple_chat<M>(State(state): State<GatewayState<M>>) -> Result<String, ApiError>
where
    M: ChatModel + 'static,
{
    state.metrics.simple().record_request();

    let response = state
        .model
        .call(&Prompt::new(DEFAULT_PROMPT))
        .await
        .map_err(|e| {
            state.metrics.simple().record_failure();
            ApiError::from(e)
        })?;

    Ok(response.first_content().unwrap_or_default().to_string())
}

/// Forward the fixed prompt and stream the reply incrementally.
///
/// The response declares UTF-8 so multi-byte text renders correctly while
/// chunks flush. Chunks are written in production order with no buffering
/// beyond the transport; a dropped connection drops the stream, which
/// aborts the upstream call.
#[instrument(skip_all)]
async fn stream_chat<M>(State(state): State<GatewayState<M>>) -> Result<Response, ApiError>
where
    M: ChatModel + 'static,
{
    state.metrics.stream().record_request();

    let stream = state
        .model
        .stream(&Prompt::new(DEFAULT_PROMPT))
        .await
        .map_err(|e| {
            state.metrics.stream().record_failure();
            ApiError::from(e)
        })?;

    let chunks = stream.map(|event| {
        event.map(|response| response.first_content().unwrap_or_default().to_string())
    });

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Body::from_stream(chunks))
        .map_err(|e| {
            ApiError::from(dashgate_error::DashGateError::from(ServerError::new(
                format!("Failed to build response: {}", e),
            )))
        })
}

/// Forward the fixed prompt with explicit sampling options.
///
/// The attached options take precedence over any defaults the client was
/// configured with.
#[instrument(skip_all)]
async fn custom_chat<M>(State(state): State<GatewayState<M>>) -> Result<String, ApiError>
where
    M: ChatModel + 'static,
{
    state.metrics.custom().record_request();

    let options = GenerationOptions::builder()
        .top_p(0.7)
        .top_k(50u32)
        .temperature(0.8)
        .build()
        .expect("Valid GenerationOptions");

    let response = state
        .model
        .call(&Prompt::with_options(DEFAULT_PROMPT, options))
        .await
        .map_err(|e| {
            state.metrics.custom().record_failure();
            ApiError::from(e)
        })?;

    Ok(response.first_content().unwrap_or_default().to_string())
}

/// JSON mode placeholder: the feature is not released yet, so this returns
/// a fixed notice and performs no model call.
///
/// Not wired to any route.
#[instrument]
pub async fn json_chat() -> String {
    JSON_MODE_PLACEHOLDER.to_string()
}
