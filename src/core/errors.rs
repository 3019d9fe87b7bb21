use reqwest::StatusCode;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    /// Transport-level failure: DNS, TLS, connect, or reading the body.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The exchange refused the request, usually a bad key, signature or nonce.
    #[error("Authentication rejected: {status} - {message}")]
    AuthenticationRejected { status: u16, message: String },

    #[error("Rate limit exceeded: {0}")]
    RateLimitExceeded(String),

    #[error("API error: {code} - {message}")]
    ApiError { code: u16, message: String },

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),

    #[error("Other error: {0}")]
    Other(String),
}

impl ExchangeError {
    /// Classify a non-success HTTP status and its body
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status.as_u16() {
            400 | 401 | 403 => Self::AuthenticationRejected {
                status: status.as_u16(),
                message: body,
            },
            429 => Self::RateLimitExceeded(body),
            code => Self::ApiError {
                code,
                message: body,
            },
        }
    }

    /// HTTP status carried by the error, if the exchange answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::AuthenticationRejected { status, .. } => Some(*status),
            Self::RateLimitExceeded(_) => Some(429),
            Self::ApiError { code, .. } => Some(*code),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpError(_))
    }
}

/// Compatibility mode for callers that treat any failure as an empty result.
///
/// The error is logged and swallowed; `None` is the failure sentinel.
pub trait Lenient<T> {
    fn lenient(self) -> Option<T>;
}

impl<T> Lenient<T> for Result<T, ExchangeError> {
    fn lenient(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                error!(status = ?e.status(), "Request failed: {}", e);
                None
            }
        }
    }
}
