use crate::error::KlaviyoError;
use crate::model::params::Params;
use crate::model::requests::TimelineQuery;
use crate::model::response::ApiResponse;
use async_trait::async_trait;

/// Interface for the v1 person API
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Gets a profile by its id
    async fn get_profile(&self, profile_id: &str) -> Result<ApiResponse, KlaviyoError>;

    /// Updates properties of a profile
    async fn update_profile(
        &self,
        profile_id: &str,
        properties: Params,
    ) -> Result<ApiResponse, KlaviyoError>;

    /// Gets the events of a profile
    async fn get_profile_metrics_timeline(
        &self,
        profile_id: &str,
        query: TimelineQuery,
    ) -> Result<ApiResponse, KlaviyoError>;

    /// Gets the events of a profile for one metric
    async fn get_profile_metrics_timeline_by_id(
        &self,
        profile_id: &str,
        metric_id: &str,
        query: TimelineQuery,
    ) -> Result<ApiResponse, KlaviyoError>;
}
