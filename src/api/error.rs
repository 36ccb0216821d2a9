//! Request Error Taxonomy
//!
//! Every remote call resolves to one of these cases. None of them is fatal:
//! the worst outcome anywhere in the UI is an inline message, a placeholder
//! tile or a stale list.

/// Error produced by the API layer or by tile content parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Bad credentials or a registration conflict. Shown inline, never retried.
    #[error("{0}")]
    Auth(String),

    /// The fetch itself failed (connection refused, DNS, CORS). Logged to the
    /// console; the affected view degrades silently.
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response with a server-provided `{error}` body. Shown inline.
    #[error("{0}")]
    Server(String),

    /// A response body or tile content string that does not parse. Rendered
    /// as a placeholder, never propagated out of the render path.
    #[error("Malformed payload: {0}")]
    Malformed(String),

    /// Local pre-submit check failed; no request is issued.
    #[error("{0}")]
    Validation(String),
}
