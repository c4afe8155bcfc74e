use crate::application::config::{Config, Credentials};
use crate::constants::{CONTENT_TYPE_JSON, DEFAULT_API_BASE_URL, USER_AGENT, API_KEY_PARAM};
use crate::error::KlaviyoResult;
use crate::model::params::{Params, build_private_body, query_pairs};
use crate::model::request::{ApiVersion, RequestDescriptor, TokenKind, build_url};
use crate::model::response::{ApiResponse, classify_response};
use crate::transport::http_client::{HttpRequest, KlaviyoHttpClient, KlaviyoHttpClientImpl};
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Client for the Klaviyo API
///
/// Every resource is available as a trait implemented by this type (see
/// [`crate::application::interfaces`]). The client holds only immutable
/// credentials, the base URL and a shared transport: it is `Send + Sync` and
/// can be cloned or wrapped in an `Arc` to be used from several tasks.
#[derive(Clone)]
pub struct Client {
    credentials: Credentials,
    base_url: Url,
    http_client: Arc<dyn KlaviyoHttpClient>,
}

impl Client {
    /// Creates a client for the default API host with the `reqwest` transport
    pub fn new(credentials: Credentials) -> KlaviyoResult<Self> {
        Self::with_transport(
            credentials,
            DEFAULT_API_BASE_URL,
            Arc::new(KlaviyoHttpClientImpl::new()?),
        )
    }

    /// Creates a client from a loaded configuration
    pub fn from_config(config: Config) -> KlaviyoResult<Self> {
        Self::with_transport(
            config.credentials,
            &config.rest_api.base_url,
            Arc::new(KlaviyoHttpClientImpl::new()?),
        )
    }

    /// Creates a client with a custom base URL and transport
    pub fn with_transport(
        credentials: Credentials,
        base_url: &str,
        http_client: Arc<dyn KlaviyoHttpClient>,
    ) -> KlaviyoResult<Self> {
        Ok(Self {
            credentials,
            base_url: Url::parse(base_url)?,
            http_client,
        })
    }

    /// Configured credentials
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Base URL every endpoint is appended to
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Public token, for payloads that embed it
    pub(crate) fn public_token(&self) -> KlaviyoResult<&str> {
        self.credentials.require(TokenKind::Public)
    }

    /// Validates the token, assembles the request, sends it and classifies the response
    ///
    /// The token check runs first: a call whose token is missing never reaches the transport.
    pub async fn execute(&self, descriptor: RequestDescriptor) -> KlaviyoResult<ApiResponse> {
        let token = self.credentials.require(descriptor.token)?;
        let request = self.build_request(descriptor, token)?;
        let raw = self.http_client.send(request).await?;
        classify_response(raw.status, &raw.body)
    }

    fn build_request(&self, descriptor: RequestDescriptor, token: &str) -> KlaviyoResult<HttpRequest> {
        let mut url = build_url(&self.base_url, descriptor.version, &descriptor.path)?;
        let mut query = Vec::new();
        let mut body = None;

        match descriptor.version {
            ApiVersion::Unversioned => {
                url.set_query(descriptor.encoded_query.as_deref());
            }
            ApiVersion::V1 => {
                let mut params = descriptor.query;
                params.insert(API_KEY_PARAM.to_string(), Value::String(token.to_string()));
                let pairs = query_pairs(&params);
                if descriptor.method == Method::GET {
                    query = pairs;
                } else {
                    body = Some(
                        url::form_urlencoded::Serializer::new(String::new())
                            .extend_pairs(pairs)
                            .finish(),
                    );
                }
            }
            ApiVersion::V2 => {
                // v2 GET carries a JSON body as well
                let payload = descriptor.body.unwrap_or_default();
                body = Some(build_private_body(payload, token)?);
                query = query_pairs(&descriptor.query);
            }
        }

        debug!(
            "Dispatching {} {} ({:?})",
            descriptor.method,
            url.path(),
            descriptor.version
        );

        Ok(HttpRequest {
            method: descriptor.method,
            url,
            headers: vec![
                ("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()),
                ("User-Agent".to_string(), USER_AGENT.to_string()),
            ],
            query,
            body,
        })
    }

    /// Sends a private v1 request
    pub(crate) async fn v1_request(
        &self,
        method: Method,
        path: Vec<String>,
        params: Params,
    ) -> KlaviyoResult<ApiResponse> {
        self.execute(RequestDescriptor::v1(method, path, params)).await
    }

    /// Sends a private v2 request
    pub(crate) async fn v2_request(
        &self,
        method: Method,
        path: Vec<String>,
        data: Params,
    ) -> KlaviyoResult<ApiResponse> {
        self.execute(RequestDescriptor::v2(method, path, data)).await
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}
