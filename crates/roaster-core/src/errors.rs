//! Logic errors.

use roaster_ghapi_interface::ApiError;
use thiserror::Error;
use time::OffsetDateTime;

/// Hint given to callers when the GitHub API throttles us.
pub const RATE_LIMIT_HINT: &str =
    "Provide a GitHub token through the ROASTER_API_GITHUB_TOKEN environment variable to raise rate limits";

/// Logic error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("GitHub user not found: {username}")]
    NotFound { username: String },

    #[error("GitHub API rate limit exceeded")]
    RateLimited {
        reset_at: Option<OffsetDateTime>,
        hint: &'static str,
    },

    /// Wraps [`roaster_ghapi_interface::ApiError`].
    #[error("API error: {source}")]
    UpstreamError { source: ApiError },
}

impl DomainError {
    /// Classify an API error raised while looking at `username` activity.
    pub fn from_api_error(username: &str, error: ApiError) -> Self {
        match error {
            ApiError::NotFound { .. } => Self::NotFound {
                username: username.into(),
            },
            ApiError::RateLimited { reset_at } => Self::RateLimited {
                reset_at,
                hint: RATE_LIMIT_HINT,
            },
            e => Self::UpstreamError { source: e },
        }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
