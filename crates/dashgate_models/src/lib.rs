//! Provider integrations for the DashGate chat gateway.
//!
//! Currently a single provider: the hosted DashScope text-generation API.

mod dashscope;

pub use dashscope::{
    DashScopeClient, DashScopeConfig, DashScopeConfigBuilder, conversions, dto,
};
