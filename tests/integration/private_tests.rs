use crate::common::*;
use assert_json_diff::assert_json_eq;
use klaviyo_client::prelude::*;
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_v2_get_sends_json_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v2/lists")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"api_key": PRIVATE_TOKEN})))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"list_id":"XyZ","list_name":"Newsletter"}]"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let response = client.get_lists().await.unwrap();

    assert_json_eq!(
        response.as_json().unwrap().clone(),
        json!([{"list_id": "XyZ", "list_name": "Newsletter"}])
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_list() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2/lists")
        .match_body(Matcher::Json(json!({
            "list_name": "VIP",
            "api_key": PRIVATE_TOKEN
        })))
        .with_status(200)
        .with_body(r#"{"list_id":"AbC"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let response = client.create_list("VIP").await.unwrap();

    #[derive(Deserialize)]
    struct Created {
        list_id: String,
    }
    let created: Created = response.deserialize().unwrap();
    assert_eq!(created.list_id, "AbC");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_list_empty_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/v2/list/AbC")
        .match_body(Matcher::Json(json!({"api_key": PRIVATE_TOKEN})))
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let client = create_test_client(&server);
    let response = client.delete_list("AbC").await.unwrap();

    assert_eq!(response, ApiResponse::text(200, ""));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_request_profile_deletion() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/api/v2/data-privacy/deletion-request")
        .match_body(Matcher::Json(json!({
            "email": "thomas.jefferson@mailinator.com",
            "api_key": PRIVATE_TOKEN
        })))
        .with_status(200)
        .with_body(r#"{"detail":"Deletion request queued"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let response = client
        .request_profile_deletion("thomas.jefferson@mailinator.com", DeletionIdType::Email)
        .await
        .unwrap();

    assert_eq!(
        response.as_json(),
        Some(&json!({"detail": "Deletion request queued"}))
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_v1_get_sends_query() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/metric/M1/timeline")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("count".into(), "100".into()),
            Matcher::UrlEncoded("sort".into(), "desc".into()),
            Matcher::UrlEncoded("since".into(), "1400000000".into()),
            Matcher::UrlEncoded("api_key".into(), PRIVATE_TOKEN.into()),
        ]))
        .with_status(200)
        .with_body(r#"{"object":"$list","data":[],"next":null}"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let response = client
        .get_metric_timeline_by_id("M1", TimelineQuery::new().since(1400000000))
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert_eq!(response.as_json().unwrap()["object"], json!("$list"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_segment_members_comma_joined() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/api/v1/segment/S1/members")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("email".into(), "a@b.com,c@d.com".into()),
            Matcher::UrlEncoded("api_key".into(), PRIVATE_TOKEN.into()),
        ]))
        .with_status(200)
        .with_body(r#"[{"email":"a@b.com"}]"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let emails = vec!["a@b.com".to_string(), "c@d.com".to_string()];
    client.get_segment_members("S1", &emails).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_profile_sends_form_body() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", "/api/v1/person/P1")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Exact(format!(
            "%24first_name=Ada&api_key={PRIVATE_TOKEN}"
        )))
        .with_status(200)
        .with_body(r#"{"object":"person","id":"P1","$first_name":"Ada"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let properties = json!({"$first_name": "Ada"}).as_object().cloned().unwrap();
    let response = client.update_profile("P1", properties).await.unwrap();

    assert_eq!(response.as_json().unwrap()["id"], json!("P1"));
    mock.assert_async().await;
}
