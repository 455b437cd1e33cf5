//! Data transfer objects for the DashScope text-generation API.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A message in the DashScope chat format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role: "system", "user", or "assistant"
    pub role: String,
    /// Message content
    pub content: String,
}

/// The input block of a generation request.
#[derive(Debug, Clone, Serialize)]
pub struct RequestInput {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
}

/// Sampling and output parameters of a generation request.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct RequestParameters {
    /// Reply shape; DashGate always requests "message"
    result_format: String,
    /// Nucleus sampling probability mass
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    /// Candidate pool size
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_k: Option<u32>,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Emit deltas instead of cumulative text on streaming calls
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    incremental_output: Option<bool>,
}

impl RequestParameters {
    /// Creates a new builder for RequestParameters.
    pub fn builder() -> RequestParametersBuilder {
        RequestParametersBuilder::default()
    }
}

/// DashScope generation request.
#[derive(Debug, Clone, Serialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerationRequest {
    /// Model identifier
    model: String,
    /// Conversation input
    input: RequestInput,
    /// Sampling parameters; omitted entirely when nothing is tuned
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<RequestParameters>,
}

impl GenerationRequest {
    /// Creates a new builder for GenerationRequest.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }
}

/// A choice in a generation reply.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyChoice {
    /// The generated message
    pub message: ChatMessage,
    /// Finish reason; the literal string "null" until generation completes
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// The output block of a generation reply.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyOutput {
    /// Generated choices
    #[serde(default)]
    pub choices: Vec<ReplyChoice>,
}

/// Token usage statistics.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyUsage {
    /// Tokens in the prompt
    #[serde(default)]
    pub input_tokens: Option<u32>,
    /// Tokens in the completion
    #[serde(default)]
    pub output_tokens: Option<u32>,
    /// Total tokens
    #[serde(default)]
    pub total_tokens: Option<u32>,
}

/// DashScope generation reply.
///
/// Both the synchronous reply body and each streamed SSE event use this
/// shape.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationReply {
    /// Generated output
    pub output: ReplyOutput,
    /// Token usage
    #[serde(default)]
    pub usage: Option<ReplyUsage>,
    /// Upstream request identifier
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Error payload returned on non-2xx responses and in-stream failures.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Upstream error code
    pub code: String,
    /// Upstream error message
    pub message: String,
    /// Upstream request identifier
    #[serde(default)]
    pub request_id: Option<String>,
}
