use http::{HeaderMap, StatusCode};
use roaster_ghapi_interface::ApiError;
use time::OffsetDateTime;

const RATE_LIMIT_REMAINING_HEADER: &str = "x-ratelimit-remaining";
const RATE_LIMIT_RESET_HEADER: &str = "x-ratelimit-reset";

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum GitHubError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Resource not found: {path}")]
    NotFoundError { path: String },

    #[error("GitHub API rate limit exceeded")]
    RateLimitError { reset_at: Option<OffsetDateTime> },

    #[error("Invalid GitHub token: {source}")]
    InvalidTokenError {
        source: http::header::InvalidHeaderValue,
    },

    #[error("Invalid GitHub API root URL: {root_url}")]
    InvalidRootUrlError { root_url: String },

    #[error("Could not format date: {source}")]
    DateFormatError { source: time::error::Format },
}

impl GitHubError {
    /// Classify an unsuccessful response from its status and headers.
    ///
    /// Returns `None` for statuses which are neither a missing resource nor throttling.
    pub fn from_status(status: StatusCode, headers: &HeaderMap, path: &str) -> Option<Self> {
        if status == StatusCode::NOT_FOUND {
            return Some(Self::NotFoundError { path: path.into() });
        }

        let quota_exhausted = header_str(headers, RATE_LIMIT_REMAINING_HEADER) == Some("0");
        if status == StatusCode::TOO_MANY_REQUESTS || (status == StatusCode::FORBIDDEN && quota_exhausted) {
            let reset_at = header_str(headers, RATE_LIMIT_RESET_HEADER)
                .and_then(|v| v.parse::<i64>().ok())
                .and_then(|ts| OffsetDateTime::from_unix_timestamp(ts).ok());

            return Some(Self::RateLimitError { reset_at });
        }

        None
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

impl From<reqwest::Error> for GitHubError {
    fn from(e: reqwest::Error) -> Self {
        GitHubError::HttpError { source: e }
    }
}

impl From<GitHubError> for ApiError {
    fn from(e: GitHubError) -> Self {
        match e {
            GitHubError::NotFoundError { path } => ApiError::NotFound { path },
            GitHubError::RateLimitError { reset_at } => ApiError::RateLimited { reset_at },
            e => ApiError::ImplementationError { source: e.into() },
        }
    }
}
