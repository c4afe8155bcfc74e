use crate::common::*;
use klaviyo_client::model::params::{Params, build_public_query_string};
use klaviyo_client::prelude::*;
use mockito::{Matcher, Server};

fn expected_query(payload: Value, is_test: bool) -> String {
    let payload: Params = payload.as_object().cloned().unwrap();
    build_public_query_string(&payload, is_test).unwrap()
}

#[tokio::test]
async fn test_track_success() {
    let mut server = Server::new_async().await;
    let query = expected_query(
        json!({
            "token": PUBLIC_TOKEN,
            "event": "Elected President",
            "properties": {},
            "customer_properties": {"email": "thomas.jefferson@mailinator.com"}
        }),
        false,
    );
    let mock = server
        .mock("GET", "/api/track")
        .match_query(Matcher::Exact(query))
        .match_header("content-type", "application/json")
        .match_header("user-agent", Matcher::Regex("^klaviyo-client/".to_string()))
        .with_status(200)
        .with_body("1")
        .create_async()
        .await;

    let client = create_test_client(&server);
    let response = client
        .track(
            "Elected President",
            TrackOptions::new().email("thomas.jefferson@mailinator.com"),
        )
        .await
        .unwrap();

    assert_eq!(response, ApiResponse::text(200, "1"));
    assert!(response.is_success_flag());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_track_rejected() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/track")
        .match_query(Matcher::UrlEncoded("test".into(), "1".into()))
        .with_status(200)
        .with_body("0")
        .create_async()
        .await;

    let client = create_test_client(&server);
    let response = client
        .track("Viewed", TrackOptions::new().external_id("123").test(true))
        .await
        .unwrap();

    assert!(!response.is_success_flag());
    assert_eq!(response.as_text(), Some("0"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_track_without_identifier_sends_nothing() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let err = client.track("Viewed", TrackOptions::new()).await.unwrap_err();

    assert!(err.is_configuration());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_identify_success() {
    let mut server = Server::new_async().await;
    let query = expected_query(
        json!({
            "token": PUBLIC_TOKEN,
            "properties": {"$city": "Boston", "email": "ada@example.com"}
        }),
        true,
    );
    let mock = server
        .mock("GET", "/api/identify")
        .match_query(Matcher::Exact(query))
        .with_status(200)
        .with_body("1")
        .create_async()
        .await;

    let client = create_test_client(&server);
    let response = client
        .identify(
            IdentifyOptions::new()
                .email("ada@example.com")
                .property("$city", "Boston")
                .test(true),
        )
        .await
        .unwrap();

    assert!(response.is_success_flag());
    mock.assert_async().await;
}
