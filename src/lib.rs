//! # Klaviyo Client
//!
//! A client for the Klaviyo marketing-automation REST API.
//!
//! The client wraps three families of endpoints:
//!
//! - **Public** endpoints (`/api/track`, `/api/identify`), authenticated with the public
//!   site token and sent as a base64 encoded `data` query parameter.
//! - **V1** endpoints (`/api/v1/...`), authenticated with the private key sent as `api_key`
//!   in the query string (or the urlencoded body for mutating verbs).
//! - **V2** endpoints (`/api/v2/...`), authenticated with the private key sent as `api_key`
//!   inside a JSON body, for every verb including `GET`.
//!
//! Each resource (lists, segments, metrics, campaigns, profiles, data privacy and the
//! public tracking API) is exposed as a trait implemented by [`Client`](application::client::Client).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use klaviyo_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), KlaviyoError> {
//!     setup_logger();
//!     let credentials = Credentials::new(Some("PUBLIC".to_string()), Some("pk_secret".to_string()))?;
//!     let client = Client::new(credentials)?;
//!
//!     let response = client
//!         .track("Placed Order", TrackOptions::new().email("someone@example.com"))
//!         .await?;
//!     info!("track accepted: {}", response.is_success_flag());
//!
//!     let lists = client.get_lists().await?;
//!     info!("lists: {}", lists);
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Every call returns [`KlaviyoResult`](error::KlaviyoResult). Missing tokens and invalid
//! arguments are reported as [`KlaviyoError::Configuration`](error::KlaviyoError::Configuration)
//! before any request is sent. HTTP failures are classified by status code into
//! authentication, rate limit, server and generic API errors. Nothing is retried.
//!
//! ## Concurrency
//!
//! A [`Client`](application::client::Client) holds only immutable credentials, the base URL
//! and a shared transport, so it can be wrapped in an `Arc` and used from many tasks.

/// Client, configuration, resource interfaces and their implementations
pub mod application;

/// Global constants
pub mod constants;

/// Error types
pub mod error;

/// Request, parameter and response models
pub mod model;

/// Commonly used types and traits
pub mod prelude;

/// HTTP transport
pub mod transport;

/// Environment and logging utilities
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
