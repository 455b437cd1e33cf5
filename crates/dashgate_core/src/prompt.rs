//! Prompt types for model invocations.

use crate::{GenerationOptions, Message};
use serde::{Deserialize, Serialize};

/// The input to a single model invocation: messages plus optional
/// sampling options.
///
/// A prompt is created per request and discarded after the call returns;
/// nothing is persisted between invocations.
///
/// # Examples
///
/// ```
/// use dashgate_core::Prompt;
///
/// let prompt = Prompt::new("你好，介绍下你自己吧。");
///
/// assert_eq!(prompt.messages().len(), 1);
/// assert!(prompt.options().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Prompt {
    /// The conversation content sent upstream
    messages: Vec<Message>,
    /// Explicit sampling options, overriding configured defaults
    options: Option<GenerationOptions>,
}

impl Prompt {
    /// Creates a prompt from plain text, wrapped in a single user message,
    /// with no explicit options.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::user(text)],
            options: None,
        }
    }

    /// Creates a prompt from plain text with explicit sampling options.
    pub fn with_options(text: impl Into<String>, options: GenerationOptions) -> Self {
        Self {
            messages: vec![Message::user(text)],
            options: Some(options),
        }
    }

    /// Creates a prompt from a prepared message list.
    pub fn from_messages(messages: Vec<Message>) -> Self {
        Self {
            messages,
            options: None,
        }
    }
}
