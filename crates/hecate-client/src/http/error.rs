/*
[INPUT]:  Error sources (HTTP, API, serialization, configuration)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Hecate task backend client
#[derive(Error, Debug)]
pub enum HecateError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response
    #[error("API error (code {code}): {message}")]
    Api { code: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded, retry after {retry_after}s")]
    RateLimit { retry_after: u64 },
}

impl HecateError {
    /// Whether the backend refused the request on business grounds
    /// (a 4xx answer other than rate limiting).
    pub fn is_rejection(&self) -> bool {
        matches!(self, HecateError::Api { code, .. } if (400..500).contains(code))
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        HecateError::Api {
            code: status.as_u16(),
            message: message.into(),
        }
    }
}

/// Result type alias for Hecate client operations
pub type Result<T> = std::result::Result<T, HecateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_is_not_a_rejection() {
        let rate_limited = HecateError::RateLimit { retry_after: 5 };
        assert!(!rate_limited.is_rejection());
        assert_eq!(
            rate_limited.to_string(),
            "Rate limit exceeded, retry after 5s"
        );
    }

    #[test]
    fn test_only_client_errors_are_rejections() {
        let server = HecateError::api_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(!server.is_rejection());

        let rejected = HecateError::api_error(StatusCode::UNPROCESSABLE_ENTITY, "duplicate name");
        assert!(rejected.is_rejection());
    }

    #[test]
    fn test_api_error_creation() {
        let err = HecateError::api_error(StatusCode::BAD_REQUEST, "Invalid priority");
        match err {
            HecateError::Api { code, message } => {
                assert_eq!(code, 400);
                assert_eq!(message, "Invalid priority");
            }
            _ => panic!("Expected Api error variant"),
        }
    }
}
