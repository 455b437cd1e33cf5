//! Request metrics for the chat gateway.
//!
//! Plain atomic counters with a serializable snapshot for JSON export via
//! the HTTP API.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for a single endpoint.
#[derive(Debug, Default)]
pub struct EndpointMetrics {
    requests: AtomicU64,
    failures: AtomicU64,
}

impl EndpointMetrics {
    /// Record an inbound request.
    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an upstream failure.
    pub fn record_failure(&self) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> EndpointSnapshot {
        EndpointSnapshot {
            requests: self.requests.load(Ordering::Relaxed),
            failures: self.failures.load(Ordering::Relaxed),
        }
    }
}

/// Metrics collector for the gateway endpoints.
///
/// Shared across handlers behind an `Arc`; counters are independent, so no
/// locking is involved.
#[derive(Debug, Default)]
pub struct MetricsCollector {
    simple: EndpointMetrics,
    stream: EndpointMetrics,
    custom: EndpointMetrics,
}

impl MetricsCollector {
    /// Create new metrics collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counters for the simple chat endpoint.
    pub fn simple(&self) -> &EndpointMetrics {
        &self.simple
    }

    /// Counters for the streaming chat endpoint.
    pub fn stream(&self) -> &EndpointMetrics {
        &self.stream
    }

    /// Counters for the custom-options chat endpoint.
    pub fn custom(&self) -> &EndpointMetrics {
        &self.custom
    }

    /// Get current metrics snapshot.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            simple: self.simple.snapshot(),
            stream: self.stream.snapshot(),
            custom: self.custom.snapshot(),
        }
    }
}

/// Snapshot of request counters at a point in time.
#[derive(Debug, Clone, Default, serde::Serialize, derive_getters::Getters)]
pub struct MetricsSnapshot {
    /// Simple chat counters
    simple: EndpointSnapshot,
    /// Streaming chat counters
    stream: EndpointSnapshot,
    /// Custom-options chat counters
    custom: EndpointSnapshot,
}

/// Endpoint counter snapshot.
#[derive(Debug, Clone, Default, serde::Serialize, derive_getters::Getters)]
pub struct EndpointSnapshot {
    /// Requests received
    requests: u64,
    /// Upstream failures
    failures: u64,
}
