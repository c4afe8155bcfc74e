use klaviyo_client::error::{ApiError, KlaviyoError};
use serde_json::json;

#[test]
fn test_error_display_configuration() {
    let error = KlaviyoError::Configuration("no token provided".to_string());
    assert_eq!(error.to_string(), "configuration error: no token provided");
}

#[test]
fn test_error_display_rate_limit() {
    let error = KlaviyoError::RateLimit(ApiError::from_body(429, ""));
    assert_eq!(error.to_string(), "rate limit exceeded with status code: 429");
}

#[test]
fn test_error_display_server() {
    let error = KlaviyoError::Server(ApiError::from_body(503, "down"));
    assert_eq!(error.to_string(), "server error with status code: 503");
}

#[test]
fn test_error_display_api() {
    let error = KlaviyoError::Api(ApiError::from_body(400, r#"{"detail":"bad"}"#));
    let text = error.to_string();
    assert!(text.contains("400"));
    assert!(text.contains("bad"));
}

#[test]
fn test_error_from_serde() {
    let serde_error = serde_json::from_str::<serde_json::Value>(r#"{"invalid": json}"#).unwrap_err();
    let error: KlaviyoError = serde_error.into();
    assert!(matches!(error, KlaviyoError::Json(_)));
    assert_eq!(error.status_code(), None);
}

#[test]
fn test_error_from_url() {
    let url_error = url::Url::parse("::").unwrap_err();
    let error: KlaviyoError = url_error.into();
    assert!(matches!(error, KlaviyoError::Url(_)));
}

#[test]
fn test_api_error_keeps_raw_body() {
    let error = ApiError::from_body(403, r#"{"message":"Invalid API key"}"#);
    assert_eq!(error.message, json!({"message": "Invalid API key"}));
    assert_eq!(error.body, r#"{"message":"Invalid API key"}"#);
}
