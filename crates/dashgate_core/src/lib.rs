//! Core data types for the DashGate chat gateway.
//!
//! This crate provides the foundation data types shared by the gateway,
//! the provider client, and the trait seam between them.

mod role;
mod message;
mod options;
mod prompt;
mod response;
mod token_usage;

pub use role::Role;
pub use message::{Message, MessageBuilder};
pub use options::{GenerationOptions, GenerationOptionsBuilder};
pub use prompt::Prompt;
pub use response::{ChatResponse, ChatResponseBuilder, Generation};
pub use token_usage::TokenUsage;
