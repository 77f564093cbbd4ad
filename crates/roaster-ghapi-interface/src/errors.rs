//! API errors.

use thiserror::Error;
use time::OffsetDateTime;

/// API error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested resource does not exist upstream.
    #[error("Resource not found: {path}")]
    NotFound { path: String },

    /// The upstream API throttled the call.
    #[error("API rate limit exceeded")]
    RateLimited { reset_at: Option<OffsetDateTime> },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `ApiError`.
pub type Result<T, E = ApiError> = core::result::Result<T, E>;
