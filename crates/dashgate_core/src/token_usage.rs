//! Token usage accounting.

use serde::{Deserialize, Serialize};

/// Token counts reported by the upstream for one invocation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct TokenUsage {
    /// Tokens in the prompt
    input_tokens: u32,
    /// Tokens in the completion
    output_tokens: u32,
    /// Total tokens used
    total_tokens: u32,
}

impl TokenUsage {
    /// Creates a new usage record.
    pub fn new(input_tokens: u32, output_tokens: u32, total_tokens: u32) -> Self {
        Self {
            input_tokens,
            output_tokens,
            total_tokens,
        }
    }
}
