use async_trait::async_trait;
use klaviyo_client::prelude::*;
use std::sync::Mutex;

/// In-memory transport recording every request and answering with a canned response
pub struct RecordingTransport {
    requests: Mutex<Vec<HttpRequest>>,
    response: RawResponse,
}

impl RecordingTransport {
    pub fn new(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            response: RawResponse::new(status, body),
        })
    }

    pub fn ok() -> Arc<Self> {
        Self::new(200, r#"{"ok":true}"#)
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests().pop().expect("no request was sent")
    }

    pub fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl KlaviyoHttpClient for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> KlaviyoResult<RawResponse> {
        self.requests.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

pub const BASE_URL: &str = "https://a.klaviyo.com/api";

pub fn client_with(credentials: Credentials, transport: Arc<RecordingTransport>) -> Client {
    Client::with_transport(credentials, BASE_URL, transport).unwrap()
}

pub fn full_client(transport: Arc<RecordingTransport>) -> Client {
    let credentials =
        Credentials::new(Some("PUBLIC_TOKEN".into()), Some("pk_flintstones".into())).unwrap();
    client_with(credentials, transport)
}

pub fn body_json(request: &HttpRequest) -> Value {
    serde_json::from_str(request.body.as_deref().expect("request has no body")).unwrap()
}

pub fn query_value(request: &HttpRequest, key: &str) -> Option<String> {
    request
        .query
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}
