//! Error types for the Klaviyo client.

use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Result alias used across the crate
pub type KlaviyoResult<T> = Result<T, KlaviyoError>;

/// Details of a failed HTTP exchange
#[derive(Debug, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    /// HTTP status code returned by the API
    pub status_code: u16,
    /// Parsed JSON body, or the raw body as a JSON string when it is not JSON
    pub message: Value,
    /// Raw response body
    pub body: String,
}

impl ApiError {
    /// Builds an error from a status code and a raw body, parsing the body as JSON when possible
    pub fn from_body(status_code: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = serde_json::from_str(&body).unwrap_or_else(|_| Value::String(body.clone()));
        Self {
            status_code,
            message,
            body,
        }
    }

    /// Builds an error carrying an explicit diagnostic message
    pub fn with_message(status_code: u16, message: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status_code,
            message: Value::String(message.into()),
            body: body.into(),
        }
    }
}

/// Errors that can occur when using the Klaviyo client.
#[derive(Error, Debug)]
pub enum KlaviyoError {
    /// Missing token or invalid argument, raised before any request is sent
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The API rejected the credentials (403)
    #[error("authentication failed with status code: {}", .0.status_code)]
    Authentication(ApiError),

    /// The API throttled the request (429)
    #[error("rate limit exceeded with status code: {}", .0.status_code)]
    RateLimit(ApiError),

    /// The API failed internally (500, 503)
    #[error("server error with status code: {}", .0.status_code)]
    Server(ApiError),

    /// Any other unexpected status, or a success body that could not be interpreted
    #[error("request failed with status code: {}: {}", .0.status_code, .0.message)]
    Api(ApiError),

    /// The transport could not complete the request
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// A payload could not be serialized or a response deserialized
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The base URL or a path could not be assembled
    #[error("url error: {0}")]
    Url(#[from] url::ParseError),
}

impl KlaviyoError {
    /// HTTP status code of the response that caused the error, if one was received
    pub fn status_code(&self) -> Option<u16> {
        self.api_error().map(|e| e.status_code)
    }

    /// Details of the failed exchange, if the error came from a response
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            KlaviyoError::Authentication(e)
            | KlaviyoError::RateLimit(e)
            | KlaviyoError::Server(e)
            | KlaviyoError::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Whether the error was raised before any network call
    pub fn is_configuration(&self) -> bool {
        matches!(self, KlaviyoError::Configuration(_))
    }
}
