use crate::constants::{API_KEY_PARAM, DATA_PARAM, MARKER_PARAM, TEST_PARAM};
use crate::error::KlaviyoResult;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Insertion-ordered request parameters
pub type Params = Map<String, Value>;

/// Point in time accepted by the tracking endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    /// Unix epoch seconds
    Epoch(i64),
    /// Structured date and time
    DateTime(DateTime<Utc>),
}

impl From<i64> for Timestamp {
    fn from(value: i64) -> Self {
        Timestamp::Epoch(value)
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(value: DateTime<Utc>) -> Self {
        Timestamp::DateTime(value)
    }
}

/// Converts a timestamp to Unix epoch seconds; integers pass through unchanged
pub fn normalize_timestamp(timestamp: Timestamp) -> i64 {
    match timestamp {
        Timestamp::Epoch(seconds) => seconds,
        Timestamp::DateTime(dt) => dt.timestamp(),
    }
}

/// Removes parameters whose value is `null`
///
/// Order is preserved and falsy values such as `0`, `false` or `""` are kept.
pub fn filter_params(params: Params) -> Params {
    params.into_iter().filter(|(_, v)| !v.is_null()).collect()
}

/// Builds the pagination parameter for list-style v2 endpoints
///
/// A missing or zero marker yields no parameter at all.
pub fn build_marker_param(marker: Option<u64>) -> Params {
    let mut params = Params::new();
    if let Some(marker) = marker.filter(|m| *m != 0) {
        params.insert(MARKER_PARAM.to_string(), Value::from(marker));
    }
    params
}

/// Encodes a public endpoint payload as `data=<base64 json>&test=<0|1>`
pub fn build_public_query_string(payload: &Params, is_test: bool) -> KlaviyoResult<String> {
    let json = serde_json::to_string(payload)?;
    let encoded = STANDARD.encode(json.as_bytes());
    Ok(url::form_urlencoded::Serializer::new(String::new())
        .append_pair(DATA_PARAM, &encoded)
        .append_pair(TEST_PARAM, if is_test { "1" } else { "0" })
        .finish())
}

/// Serializes a private endpoint payload with the private key merged in as `api_key`
pub fn build_private_body(mut payload: Params, private_token: &str) -> KlaviyoResult<String> {
    payload.insert(
        API_KEY_PARAM.to_string(),
        Value::String(private_token.to_string()),
    );
    Ok(serde_json::to_string(&payload)?)
}

/// Flattens parameters into string pairs for query strings and urlencoded bodies
///
/// Strings are used verbatim, arrays repeat their key once per element, `null`
/// values are skipped and everything else is written as JSON text.
pub fn query_pairs(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items.iter().filter(|i| !i.is_null()) {
                    pairs.push((key.clone(), scalar_to_string(item)));
                }
            }
            other => pairs.push((key.clone(), scalar_to_string(other))),
        }
    }
    pairs
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
