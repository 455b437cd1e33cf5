//! Response types from model invocations.

use crate::TokenUsage;
use serde::{Deserialize, Serialize};

/// A single candidate output from the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Generation {
    /// Generated text content
    content: String,
    /// Why generation finished, when the upstream reports it
    finish_reason: Option<String>,
}

impl Generation {
    /// Creates a generation with no finish reason.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            finish_reason: None,
        }
    }

    /// Creates a generation with a finish reason.
    pub fn with_finish_reason(content: impl Into<String>, finish_reason: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            finish_reason: Some(finish_reason.into()),
        }
    }
}

/// The result of one model invocation.
///
/// A streaming call yields a sequence of these; each event's first
/// candidate carries one incremental chunk of text.
///
/// # Examples
///
/// ```
/// use dashgate_core::ChatResponse;
///
/// let response = ChatResponse::from_content("你好，我是助手");
/// assert_eq!(response.first_content(), Some("你好，我是助手"));
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ChatResponse {
    /// Candidate outputs, in upstream order
    generations: Vec<Generation>,
    /// Token accounting, when the upstream reports it
    #[builder(default)]
    usage: Option<TokenUsage>,
    /// Upstream request identifier, when the upstream reports it
    #[builder(default)]
    request_id: Option<String>,
}

impl ChatResponse {
    /// Returns a builder for constructing a ChatResponse.
    pub fn builder() -> ChatResponseBuilder {
        ChatResponseBuilder::default()
    }

    /// Creates a response with a single candidate and no metadata.
    pub fn from_content(content: impl Into<String>) -> Self {
        Self {
            generations: vec![Generation::new(content)],
            usage: None,
            request_id: None,
        }
    }

    /// The first candidate's text content, if any candidate exists.
    pub fn first_content(&self) -> Option<&str> {
        self.generations.first().map(|g| g.content().as_str())
    }
}
