//! Error types for the SVGL API client.
//!
//! # Design
//! `Validation` errors are raised before any request is built. `Http` carries
//! the status of a non-2xx response and renders as
//! `HTTP error! status: <status> <status-text>`, a format callers match on.
//! Transport and decode failures are displayed transparently so the
//! underlying diagnostic reaches the caller untouched.

/// Boxed failure produced by a `Transport`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Input rejected locally, before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Category cannot be empty")]
    EmptyCategory,

    #[error("Search query cannot be empty")]
    EmptySearchQuery,
}

/// Errors returned by `SvglClient` and `Svgl` operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The server answered with a non-2xx status.
    #[error("HTTP error! status: {status} {status_text}")]
    Http { status: u16, status_text: String },

    /// The request never produced a response (DNS, connect, timeout, ...).
    #[error(transparent)]
    Transport(BoxError),

    /// A 2xx body could not be decoded into the expected type.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// The base URL and endpoint did not form a valid absolute URL.
    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    pub fn transport(err: impl Into<BoxError>) -> Self {
        ApiError::Transport(err.into())
    }

    /// HTTP status of an `Http` error, `None` for every other variant.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
