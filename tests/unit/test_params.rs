use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use klaviyo_client::model::params::{
    Params, build_marker_param, build_private_body, build_public_query_string, filter_params,
};
use serde_json::{Value, json};

fn params(value: Value) -> Params {
    value.as_object().cloned().unwrap()
}

fn decode_data(query: &str) -> Value {
    let data = url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == "data")
        .map(|(_, v)| v.into_owned())
        .expect("missing data parameter");
    serde_json::from_slice(&STANDARD.decode(data).unwrap()).unwrap()
}

#[test]
fn test_filter_params_drops_null_keeps_zero() {
    let filtered = filter_params(params(json!({"a": 1, "b": null, "c": 0})));
    assert_eq!(Value::Object(filtered), json!({"a": 1, "c": 0}));
}

#[test]
fn test_filter_params_is_identity_without_nulls() {
    let payloads = [
        json!({}),
        json!({"count": 1, "sort": "asc"}),
        json!({"flag": false, "name": "", "n": 0, "list": [1, null]}),
    ];
    for payload in payloads {
        let original = params(payload);
        assert_eq!(filter_params(original.clone()), original);
    }
}

#[test]
fn test_public_query_string() {
    let query = build_public_query_string(&params(json!({"token": "t"})), true).unwrap();
    assert!(query.contains("test=1"));
    assert!(query.contains("data="));
    assert_eq!(decode_data(&query), json!({"token": "t"}));
}

#[test]
fn test_public_query_string_nested_payload() {
    let payload = params(json!({
        "token": "AB00CD",
        "event": "Elected President",
        "customer_properties": {"$email": "thomas.jefferson@example.com"},
        "properties": {
            "PreviouslyVicePresident": true,
            "YearElected": 1801,
            "VicePresidents": ["Aaron Burr", "George Clinton"]
        },
        "time": 1589983886
    }));
    let query = build_public_query_string(&payload, false).unwrap();
    assert!(query.contains('&'));
    assert!(query.ends_with("test=0"));
    assert_eq!(decode_data(&query), Value::Object(payload));
}

#[test]
fn test_private_body() {
    let body = build_private_body(params(json!({"emails": ["a@b.com"]})), "pk_1").unwrap();
    let value: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value, json!({"emails": ["a@b.com"], "api_key": "pk_1"}));
}

#[test]
fn test_marker_param() {
    assert_eq!(Value::Object(build_marker_param(Some(2000))), json!({"marker": 2000}));
    assert!(build_marker_param(None).is_empty());
}
