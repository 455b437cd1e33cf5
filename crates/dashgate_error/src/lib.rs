//! Error types for the DashGate chat gateway.
//!
//! This crate provides the foundation error types used across the DashGate
//! workspace: per-domain errors with source location tracking and a boxed
//! top-level error for crate boundaries.

mod config;
mod dashscope;
mod server;

pub use config::ConfigError;
pub use dashscope::{DashScopeError, DashScopeErrorKind};
pub use server::ServerError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum DashGateErrorKind {
    /// DashScope client error (HTTP, API, parse, stream)
    DashScope(DashScopeError),
    /// Configuration error
    Config(ConfigError),
    /// Gateway server error
    Server(ServerError),
}

impl std::fmt::Display for DashGateErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashGateErrorKind::DashScope(e) => write!(f, "{}", e),
            DashGateErrorKind::Config(e) => write!(f, "{}", e),
            DashGateErrorKind::Server(e) => write!(f, "{}", e),
        }
    }
}

/// DashGate error with kind discrimination.
///
/// The kind is boxed to keep the error pointer-sized on the happy path.
#[derive(Debug)]
pub struct DashGateError(Box<DashGateErrorKind>);

impl DashGateError {
    /// Create a new error from a kind.
    pub fn new(kind: DashGateErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DashGateErrorKind {
        &self.0
    }
}

impl std::fmt::Display for DashGateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DashGate Error: {}", self.0)
    }
}

impl std::error::Error for DashGateError {}

// Generic From implementation for any type that converts to DashGateErrorKind
impl<T> From<T> for DashGateError
where
    T: Into<DashGateErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for DashGate operations.
pub type DashGateResult<T> = std::result::Result<T, DashGateError>;
