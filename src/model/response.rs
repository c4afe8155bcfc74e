use crate::error::{ApiError, KlaviyoError, KlaviyoResult};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

/// Bodies the public endpoints answer with instead of JSON
const PUBLIC_API_RESPONSES: [&str; 2] = ["0", "1"];

/// Body of a successful response
#[derive(Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum ResponseData {
    /// Parsed JSON body
    Json(Value),
    /// Raw text body: empty, or the public endpoints' `"0"`/`"1"`
    Text(String),
}

/// Successful API response
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code (200 or 202)
    pub status_code: u16,
    /// Response body
    pub data: ResponseData,
}

impl std::fmt::Debug for ResponseData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResponseData::Json(value) => write!(f, "Json({value})"),
            ResponseData::Text(text) => write!(f, "Text({text:?})"),
        }
    }
}

impl ApiResponse {
    /// Creates a response with a JSON body
    pub fn json(status_code: u16, value: Value) -> Self {
        Self {
            status_code,
            data: ResponseData::Json(value),
        }
    }

    /// Creates a response with a text body
    pub fn text(status_code: u16, text: impl Into<String>) -> Self {
        Self {
            status_code,
            data: ResponseData::Text(text.into()),
        }
    }

    /// JSON body, if the response carried one
    pub fn as_json(&self) -> Option<&Value> {
        match &self.data {
            ResponseData::Json(value) => Some(value),
            ResponseData::Text(_) => None,
        }
    }

    /// Text body, if the response was not JSON
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            ResponseData::Text(text) => Some(text),
            ResponseData::Json(_) => None,
        }
    }

    /// Whether a public endpoint accepted the call (body `"1"`)
    pub fn is_success_flag(&self) -> bool {
        self.as_text() == Some("1")
    }

    /// Deserializes the JSON body into a typed value
    pub fn deserialize<T: DeserializeOwned>(&self) -> KlaviyoResult<T> {
        let value = match &self.data {
            ResponseData::Json(value) => value.clone(),
            ResponseData::Text(text) => Value::String(text.clone()),
        };
        Ok(serde_json::from_value(value)?)
    }
}

/// Maps a status code and body to a typed response or a typed error
///
/// | status | outcome |
/// |---|---|
/// | 403 | [`KlaviyoError::Authentication`] |
/// | 429 | [`KlaviyoError::RateLimit`] |
/// | 500, 503 | [`KlaviyoError::Server`] |
/// | 200, 202 | JSON or legacy text body |
/// | other | [`KlaviyoError::Api`] |
pub fn classify_response(status_code: u16, body: &str) -> KlaviyoResult<ApiResponse> {
    match status_code {
        403 => {
            warn!("Authentication failed: {}", body);
            Err(KlaviyoError::Authentication(ApiError::from_body(
                status_code,
                body,
            )))
        }
        429 => {
            warn!("Rate limit exceeded: {}", body);
            Err(KlaviyoError::RateLimit(ApiError::from_body(status_code, body)))
        }
        500 | 503 => {
            error!("Server error {}: {}", status_code, body);
            Err(KlaviyoError::Server(ApiError::from_body(status_code, body)))
        }
        200 | 202 => handle_successful_response(status_code, body),
        _ => {
            error!("Request failed with status {}: {}", status_code, body);
            Err(KlaviyoError::Api(ApiError::from_body(status_code, body)))
        }
    }
}

// "0" and "1" are valid JSON numbers, so the legacy text bodies are matched first
fn handle_successful_response(status_code: u16, body: &str) -> KlaviyoResult<ApiResponse> {
    if body.is_empty() || PUBLIC_API_RESPONSES.contains(&body) {
        return Ok(ApiResponse::text(status_code, body));
    }
    match serde_json::from_str::<Value>(body) {
        Ok(value) => Ok(ApiResponse::json(status_code, value)),
        Err(e) => {
            error!("Response did not return JSON: {}", e);
            Err(KlaviyoError::Api(ApiError::with_message(
                status_code,
                format!("response did not return JSON: {e}"),
                body,
            )))
        }
    }
}
