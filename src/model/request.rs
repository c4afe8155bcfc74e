use crate::error::{KlaviyoError, KlaviyoResult};
use crate::model::params::Params;
use reqwest::Method;
use url::Url;

/// API family a request is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiVersion {
    /// Public `track`/`identify` endpoints, no version segment
    Unversioned,
    /// Private `v1` endpoints
    V1,
    /// Private `v2` endpoints
    V2,
}

impl ApiVersion {
    /// Path segment inserted after the base URL
    pub fn segment(&self) -> Option<&'static str> {
        match self {
            ApiVersion::Unversioned => None,
            ApiVersion::V1 => Some("v1"),
            ApiVersion::V2 => Some("v2"),
        }
    }
}

/// Token a request must be authenticated with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Public site token
    Public,
    /// Private API key
    Private,
}

/// Fixed paths of the public endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublicEndpoint {
    /// Event tracking
    Track,
    /// Profile identification
    Identify,
}

impl PublicEndpoint {
    /// Path segment of the endpoint
    pub fn path(&self) -> &'static str {
        match self {
            PublicEndpoint::Track => "track",
            PublicEndpoint::Identify => "identify",
        }
    }
}

/// Everything needed to dispatch one API call
///
/// Built fresh for every call and consumed by the dispatcher.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP verb
    pub method: Method,
    /// Resource path segments, each escaped on its own
    pub path: Vec<String>,
    /// API family
    pub version: ApiVersion,
    /// Query parameters
    pub query: Params,
    /// Pre-encoded query string, used by the public endpoints
    pub encoded_query: Option<String>,
    /// Body parameters
    pub body: Option<Params>,
    /// Token the call requires
    pub token: TokenKind,
}

impl RequestDescriptor {
    /// Describes a public endpoint call carrying an already encoded query string
    pub fn public(endpoint: PublicEndpoint, encoded_query: String) -> Self {
        Self {
            method: Method::GET,
            path: vec![endpoint.path().to_string()],
            version: ApiVersion::Unversioned,
            query: Params::new(),
            encoded_query: Some(encoded_query),
            body: None,
            token: TokenKind::Public,
        }
    }

    /// Describes a private v1 call
    pub fn v1(method: Method, path: Vec<String>, params: Params) -> Self {
        Self {
            method,
            path,
            version: ApiVersion::V1,
            query: params,
            encoded_query: None,
            body: None,
            token: TokenKind::Private,
        }
    }

    /// Describes a private v2 call
    pub fn v2(method: Method, path: Vec<String>, body: Params) -> Self {
        Self {
            method,
            path,
            version: ApiVersion::V2,
            query: Params::new(),
            encoded_query: None,
            body: Some(body),
            token: TokenKind::Private,
        }
    }
}

/// Builds the path segments of a resource from its parts
///
/// ```
/// use klaviyo_client::model::request::resource_path;
/// assert_eq!(resource_path(&["list", "abc", "members"]), vec!["list", "abc", "members"]);
/// ```
pub fn resource_path(segments: &[&str]) -> Vec<String> {
    segments.iter().map(|s| s.to_string()).collect()
}

/// Composes the full URL of a request: `<base>[/<version>]/<segments...>`
///
/// Every segment is percent-escaped as a single path segment, so an id
/// containing `/` cannot change the resource being addressed.
pub fn build_url(base: &Url, version: ApiVersion, segments: &[String]) -> KlaviyoResult<Url> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| KlaviyoError::Configuration(format!("invalid base url: {base}")))?;
        path.pop_if_empty();
        if let Some(version) = version.segment() {
            path.push(version);
        }
        path.extend(segments);
    }
    Ok(url)
}
