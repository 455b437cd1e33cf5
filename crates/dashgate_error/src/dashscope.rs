//! DashScope-specific error types.

/// DashScope-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DashScopeErrorKind {
    /// API key not found in environment
    MissingApiKey,
    /// Failed to create the HTTP client
    ClientCreation(String),
    /// HTTP/network failure before a response was received
    Http(String),
    /// API returned an error response
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the response body
        message: String,
    },
    /// Request could not be constructed
    InvalidRequest(String),
    /// Failed to parse a response or event payload
    Parse(String),
    /// SSE stream was interrupted or carried invalid data
    Stream(String),
    /// Reply contained no choices
    EmptyReply,
}

impl std::fmt::Display for DashScopeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DashScopeErrorKind::MissingApiKey => {
                write!(f, "DASHSCOPE_API_KEY environment variable not set")
            }
            DashScopeErrorKind::ClientCreation(msg) => {
                write!(f, "Failed to create DashScope client: {}", msg)
            }
            DashScopeErrorKind::Http(msg) => {
                write!(f, "DashScope request failed: {}", msg)
            }
            DashScopeErrorKind::Api { status, message } => {
                write!(f, "DashScope API error (status {}): {}", status, message)
            }
            DashScopeErrorKind::InvalidRequest(msg) => {
                write!(f, "Invalid request: {}", msg)
            }
            DashScopeErrorKind::Parse(msg) => {
                write!(f, "Failed to parse DashScope response: {}", msg)
            }
            DashScopeErrorKind::Stream(msg) => {
                write!(f, "DashScope stream interrupted: {}", msg)
            }
            DashScopeErrorKind::EmptyReply => {
                write!(f, "DashScope reply contained no choices")
            }
        }
    }
}

/// DashScope error with source location tracking.
///
/// # Examples
///
/// ```
/// use dashgate_error::{DashScopeError, DashScopeErrorKind};
///
/// let err = DashScopeError::new(DashScopeErrorKind::Api {
///     status: 429,
///     message: "Requests throttled".to_string(),
/// });
/// assert!(format!("{}", err).contains("429"));
/// ```
#[derive(Debug, Clone)]
pub struct DashScopeError {
    /// The kind of error that occurred
    pub kind: DashScopeErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DashScopeError {
    /// Create a new DashScopeError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DashScopeErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for DashScopeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "DashScope Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for DashScopeError {}
