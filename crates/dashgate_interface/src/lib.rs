//! Trait definitions for the DashGate chat gateway.
//!
//! The gateway depends on these seams rather than on a concrete provider,
//! so tests can substitute stub clients.

mod chat_model;

pub use chat_model::{ChatModel, ChatStream};
