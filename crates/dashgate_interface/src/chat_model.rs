//! Chat model client trait.

use async_trait::async_trait;
use dashgate_core::{ChatResponse, Prompt};
use dashgate_error::DashGateResult;
use futures_util::stream::BoxStream;

/// A lazily produced, finite, one-shot sequence of response events.
///
/// Events arrive in production order; the sequence ends when the model
/// finishes generating and is not restartable. Dropping the stream cancels
/// the underlying call on a best-effort basis.
pub type ChatStream = BoxStream<'static, DashGateResult<ChatResponse>>;

/// Capability trait for hosted chat model clients.
///
/// Implementations hold whatever connection state they need; callers hold
/// an immutable reference supplied at construction and issue one-shot
/// request/response invocations through it.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Synchronous call: send the prompt, wait for the complete reply.
    ///
    /// # Errors
    ///
    /// Upstream failures (network, authentication, malformed response,
    /// throttling) propagate unmodified; there is no retry or fallback.
    async fn call(&self, prompt: &Prompt) -> DashGateResult<ChatResponse>;

    /// Streaming call: send the prompt, receive incremental reply events.
    ///
    /// # Errors
    ///
    /// Failures establishing the call are returned directly; failures
    /// mid-generation surface as an error item in the stream.
    async fn stream(&self, prompt: &Prompt) -> DashGateResult<ChatStream>;
}
