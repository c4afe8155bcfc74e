//! # Klaviyo Client Prelude
//!
//! This module provides a convenient way to import the most commonly used types and traits
//! from the Klaviyo client library. Importing the prelude brings every resource trait into
//! scope, so resource methods can be called directly on a [`Client`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use klaviyo_client::prelude::*;
//!
//! # async fn run() -> Result<(), KlaviyoError> {
//! let config = Config::from_env()?;
//! let client = Client::from_config(config)?;
//! let metrics = client.get_metrics(Page::default()).await?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration and credentials
pub use crate::application::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types of the library
pub use crate::error::{ApiError, KlaviyoError, KlaviyoResult};

// ============================================================================
// CLIENT AND RESOURCE INTERFACES
// ============================================================================

/// Client dispatching every call
pub use crate::application::client::Client;

/// Resource traits implemented by the client
pub use crate::application::services::{
    CampaignService, DataPrivacyService, ListService, MetricService, ProfileService,
    PublicService, SegmentService,
};

// ============================================================================
// TRANSPORT
// ============================================================================

/// HTTP transport trait and default implementation
pub use crate::transport::http_client::{
    HttpRequest, KlaviyoHttpClient, KlaviyoHttpClientImpl, RawResponse,
};

// ============================================================================
// MODELS
// ============================================================================

/// Parameters and payload encoding
pub use crate::model::params::{Params, Timestamp};

/// Request options
pub use crate::model::requests::{
    DeletionIdType, IdentifyOptions, MetricExportRequest, MetricUnit, Page, RecipientsQuery,
    Since, Sort, TimelineQuery, TrackOptions,
};

/// Responses
pub use crate::model::response::{ApiResponse, ResponseData};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use serde_json::{Value, json};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for timestamps
pub use chrono::{DateTime, Utc};
