use crate::common::*;
use klaviyo_client::prelude::*;
use mockito::{Matcher, Server};

async fn get_profile_with_status(status: usize, body: &str) -> KlaviyoError {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/person/P1")
        .match_query(Matcher::Any)
        .with_status(status)
        .with_body(body)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let err = client.get_profile("P1").await.unwrap_err();
    mock.assert_async().await;
    err
}

#[tokio::test]
async fn test_authentication_error() {
    let err = get_profile_with_status(403, r#"{"message":"Invalid API key"}"#).await;
    match err {
        KlaviyoError::Authentication(e) => {
            assert_eq!(e.status_code, 403);
            assert_eq!(e.message, json!({"message": "Invalid API key"}));
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_error() {
    let err = get_profile_with_status(429, "Too Many Requests").await;
    assert!(matches!(err, KlaviyoError::RateLimit(_)));
    assert_eq!(err.api_error().unwrap().message, json!("Too Many Requests"));
}

#[tokio::test]
async fn test_server_errors() {
    for status in [500, 503] {
        let err = get_profile_with_status(status, "").await;
        assert!(matches!(err, KlaviyoError::Server(_)));
        assert_eq!(err.status_code(), Some(status as u16));
    }
}

#[tokio::test]
async fn test_other_status_is_api_error() {
    let err = get_profile_with_status(404, r#"{"message":"not found"}"#).await;
    match err {
        KlaviyoError::Api(e) => assert_eq!(e.status_code, 404),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_success_is_api_error() {
    let err = get_profile_with_status(200, "<html>maintenance</html>").await;
    match err {
        KlaviyoError::Api(e) => {
            assert_eq!(e.status_code, 200);
            assert_eq!(e.body, "<html>maintenance</html>");
        }
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_private_token_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let mut config = Config::new(Credentials::public(PUBLIC_TOKEN).unwrap());
    config.rest_api.base_url = format!("{}/api", server.url());
    let client = Client::from_config(config).unwrap();

    let err = client.get_profile("P1").await.unwrap_err();
    assert!(err.is_configuration());
    mock.assert_async().await;
}
