use crate::error::KlaviyoError;
use crate::model::requests::{IdentifyOptions, TrackOptions};
use crate::model::response::ApiResponse;
use async_trait::async_trait;

/// Interface for the public tracking API (`/api/track`, `/api/identify`)
///
/// These calls need the public token. The API answers with a text body, `"1"`
/// when the call was accepted and `"0"` otherwise; see
/// [`ApiResponse::is_success_flag`].
#[async_trait]
pub trait PublicService: Send + Sync {
    /// Records an event (metric) for the profile identified by email or external id
    ///
    /// # Errors
    /// [`KlaviyoError::Configuration`] when neither email nor external id is set.
    async fn track(&self, event: &str, options: TrackOptions) -> Result<ApiResponse, KlaviyoError>;

    /// Records an event that only counts once per profile
    async fn track_once(
        &self,
        event: &str,
        options: TrackOptions,
    ) -> Result<ApiResponse, KlaviyoError>;

    /// Creates or updates a profile and its properties
    ///
    /// # Errors
    /// [`KlaviyoError::Configuration`] when neither email nor external id is set.
    async fn identify(&self, options: IdentifyOptions) -> Result<ApiResponse, KlaviyoError>;
}
