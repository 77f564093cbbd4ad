//! Server errors.

use actix_http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use roaster_core::DomainError;
use thiserror::Error;
use time::format_description::well_known::Rfc2822;

/// Server error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("username is required")]
    MissingUsername,

    #[error("invalid query: {message}")]
    InvalidQuery { message: String },

    #[error("Domain error,\n  caused by: {}", source)]
    DomainError { source: DomainError },

    #[error("Could not configure metrics: {message}")]
    MetricsError { message: String },

    #[error("I/O error,\n  caused by: {}", source)]
    IoError { source: std::io::Error },
}

impl From<DomainError> for ServerError {
    fn from(e: DomainError) -> Self {
        Self::DomainError { source: e }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match &self {
            ServerError::MissingUsername | ServerError::InvalidQuery { .. } => {
                StatusCode::BAD_REQUEST
            }
            ServerError::DomainError { source } => match source {
                DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
                DomainError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
                DomainError::UpstreamError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            },
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match &self {
            ServerError::MissingUsername | ServerError::InvalidQuery { .. } => serde_json::json!({
                "error": self.to_string()
            }),
            ServerError::DomainError { source } => match source {
                DomainError::NotFound { .. } => serde_json::json!({
                    "error": "GitHub user not found"
                }),
                DomainError::RateLimited { reset_at, hint } => {
                    let mut body = serde_json::json!({
                        "error": "GitHub API rate limit exceeded",
                        "solution": hint,
                    });

                    if let Some(reset_time) = reset_at.and_then(|r| r.format(&Rfc2822).ok()) {
                        body["reset_time"] = serde_json::Value::String(reset_time);
                    }

                    body
                }
                DomainError::UpstreamError { source } => serde_json::json!({
                    "error": "Failed to fetch GitHub data",
                    "details": source.to_string(),
                }),
            },
            e => serde_json::json!({
                "error": "Internal error",
                "details": e.to_string(),
            }),
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Result alias for `ServerError`.
pub type Result<T> = core::result::Result<T, ServerError>;
