use klaviyo_client::prelude::*;

#[test]
fn test_rest_api_config_default() {
    let config = RestApiConfig::default();
    assert_eq!(config.base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn test_rest_api_config_serialization() {
    let config = RestApiConfig {
        base_url: "http://localhost:8080/api".to_string(),
    };
    let json = serde_json::to_string(&config).unwrap();
    let deserialized: RestApiConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(config, deserialized);
}

#[test]
fn test_config_new_uses_default_host() {
    let config = Config::new(Credentials::public("pub").unwrap());
    assert_eq!(config.rest_api.base_url, "https://a.klaviyo.com/api");
    assert_eq!(config.credentials.public_token(), Some("pub"));
    assert_eq!(config.credentials.private_token(), None);
}

#[test]
fn test_client_from_config() {
    let mut config = Config::new(Credentials::private("pk").unwrap());
    config.rest_api.base_url = "http://localhost:9999/api".to_string();
    let client = Client::from_config(config).unwrap();
    assert_eq!(client.base_url().as_str(), "http://localhost:9999/api");
    assert!(client.credentials().has_private());
}
