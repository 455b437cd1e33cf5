//! DashScope text-generation API integration.

mod client;
mod config;
pub mod conversions;
pub mod dto;
mod sse;

pub use client::DashScopeClient;
pub use config::{DashScopeConfig, DashScopeConfigBuilder};
pub(crate) use sse::SseFramer;
