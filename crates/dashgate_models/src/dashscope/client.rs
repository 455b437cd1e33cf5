//! DashScope HTTP client.

use crate::dashscope::dto::{ApiErrorBody, GenerationReply};
use crate::dashscope::{DashScopeConfig, SseFramer, conversions};
use async_stream::try_stream;
use async_trait::async_trait;
use dashgate_core::{ChatResponse, Prompt};
use dashgate_error::{DashGateResult, DashScopeError, DashScopeErrorKind};
use dashgate_interface::{ChatModel, ChatStream};
use futures_util::StreamExt;
use tracing::{debug, error, instrument};

/// Path of the text-generation endpoint.
const GENERATION_PATH: &str = "/api/v1/services/aigc/text-generation/generation";

/// Client for the hosted DashScope text-generation API.
///
/// Holds an HTTP connection pool and the connection configuration; each
/// call is an independent request/response exchange with no state carried
/// between invocations.
#[derive(Debug, Clone)]
pub struct DashScopeClient {
    client: reqwest::Client,
    config: DashScopeConfig,
}

impl DashScopeClient {
    /// Creates a new DashScope client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    #[instrument(skip(config), fields(model = %config.model()))]
    pub fn new(config: DashScopeConfig) -> DashGateResult<Self> {
        use std::time::Duration;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| {
                DashScopeError::new(DashScopeErrorKind::ClientCreation(e.to_string()))
            })?;

        debug!(
            model = %config.model(),
            url = %config.base_url(),
            "Created DashScope client"
        );

        Ok(Self { client, config })
    }

    /// Creates a client configured from environment variables.
    pub fn from_env() -> DashGateResult<Self> {
        Self::new(DashScopeConfig::from_env()?)
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url(), GENERATION_PATH)
    }

    /// Sends a synchronous generation request.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API rejects it, or the
    /// reply cannot be parsed. Failures propagate unmodified; there is no
    /// retry.
    #[instrument(skip(self, prompt), fields(model = %self.config.model()))]
    pub async fn generate(&self, prompt: &Prompt) -> DashGateResult<ChatResponse> {
        let request = conversions::to_generation_request(
            prompt,
            self.config.model(),
            self.config.default_options().as_ref(),
            false,
        )?;

        debug!(
            message_count = request.input().messages.len(),
            "Sending generation request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                DashScopeError::new(DashScopeErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), body).into());
        }

        let reply: GenerationReply = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse reply");
            DashScopeError::new(DashScopeErrorKind::Parse(e.to_string()))
        })?;

        debug!(
            choices = reply.output.choices.len(),
            request_id = reply.request_id.as_deref().unwrap_or(""),
            "Received generation reply"
        );

        Ok(conversions::from_reply(&reply)?)
    }

    /// Sends a streaming generation request.
    ///
    /// The returned stream is lazy, finite, and one-shot: each item is one
    /// reply event in production order, and dropping the stream aborts the
    /// upstream connection.
    ///
    /// # Errors
    ///
    /// Returns an error if the call cannot be established; failures while
    /// streaming surface as error items.
    #[instrument(skip(self, prompt), fields(model = %self.config.model()))]
    pub async fn generate_stream(&self, prompt: &Prompt) -> DashGateResult<ChatStream> {
        let request = conversions::to_generation_request(
            prompt,
            self.config.model(),
            self.config.default_options().as_ref(),
            true,
        )?;

        let response = self
            .client
            .post(self.endpoint())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("X-DashScope-SSE", "enable")
            .header("Accept", "text/event-stream")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                DashScopeError::new(DashScopeErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status.as_u16(), body).into());
        }

        debug!("Streaming generation reply");

        let mut events = response.bytes_stream();
        let stream: ChatStream = Box::pin(try_stream! {
            let mut framer = SseFramer::new();
            while let Some(chunk) = events.next().await {
                let chunk = chunk.map_err(|e| {
                    DashScopeError::new(DashScopeErrorKind::Stream(e.to_string()))
                })?;
                for payload in framer.push(&chunk)? {
                    yield conversions::from_event_payload(&payload)?;
                }
            }
        });

        Ok(stream)
    }
}

#[async_trait]
impl ChatModel for DashScopeClient {
    async fn call(&self, prompt: &Prompt) -> DashGateResult<ChatResponse> {
        self.generate(prompt).await
    }

    async fn stream(&self, prompt: &Prompt) -> DashGateResult<ChatStream> {
        self.generate_stream(prompt).await
    }
}

/// Maps a non-2xx response body to an API error.
fn api_error(status: u16, body: String) -> DashScopeError {
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|e| format!("{}: {}", e.code, e.message))
        .unwrap_or(body);
    error!(status, message = %message, "DashScope API error");
    DashScopeError::new(DashScopeErrorKind::Api { status, message })
}
