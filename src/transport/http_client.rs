use crate::constants::USER_AGENT;
use crate::error::KlaviyoResult;
use async_trait::async_trait;
use reqwest::{Client, Method};
use tracing::debug;
use url::Url;

/// A fully assembled HTTP request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP verb
    pub method: Method,
    /// Absolute URL, including any pre-encoded query string
    pub url: Url,
    /// Header name and value pairs
    pub headers: Vec<(String, String)>,
    /// Additional query parameters
    pub query: Vec<(String, String)>,
    /// Serialized body
    pub body: Option<String>,
}

/// Status and body of a received response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl RawResponse {
    /// Creates a raw response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Transport used by the client to reach the Klaviyo API
///
/// Implementations send exactly one request per call and never retry.
/// They must be `Send + Sync` so a client can be shared across tasks.
#[async_trait]
pub trait KlaviyoHttpClient: Send + Sync {
    /// Sends the request and returns the raw response, whatever its status
    async fn send(&self, request: HttpRequest) -> KlaviyoResult<RawResponse>;
}

/// Default transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct KlaviyoHttpClientImpl {
    http_client: Client,
}

impl KlaviyoHttpClientImpl {
    /// Creates a transport with the crate user agent
    pub fn new() -> KlaviyoResult<Self> {
        let http_client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http_client })
    }

    /// Wraps an existing `reqwest` client
    pub fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl KlaviyoHttpClient for KlaviyoHttpClientImpl {
    async fn send(&self, request: HttpRequest) -> KlaviyoResult<RawResponse> {
        debug!("{} {}", request.method, request.url.path());

        let mut builder = self.http_client.request(request.method, request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        debug!("Response status: {}", status);
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}
