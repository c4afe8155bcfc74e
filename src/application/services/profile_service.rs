use crate::application::client::Client;
use crate::application::interfaces::profiles::ProfileService;
use crate::error::KlaviyoError;
use crate::model::params::{Params, filter_params};
use crate::model::request::resource_path;
use crate::model::requests::TimelineQuery;
use crate::model::response::ApiResponse;
use async_trait::async_trait;
use reqwest::Method;
use tracing::info;

const PERSON: &str = "person";

#[async_trait]
impl ProfileService for Client {
    async fn get_profile(&self, profile_id: &str) -> Result<ApiResponse, KlaviyoError> {
        info!("Getting profile {}", profile_id);
        self.v1_request(
            Method::GET,
            resource_path(&[PERSON, profile_id]),
            Params::new(),
        )
        .await
    }

    async fn update_profile(
        &self,
        profile_id: &str,
        properties: Params,
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Updating {} properties of profile {}", properties.len(), profile_id);
        self.v1_request(
            Method::PUT,
            resource_path(&[PERSON, profile_id]),
            properties,
        )
        .await
    }

    async fn get_profile_metrics_timeline(
        &self,
        profile_id: &str,
        query: TimelineQuery,
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Getting timeline of profile {}", profile_id);
        self.v1_request(
            Method::GET,
            resource_path(&[PERSON, profile_id, "metrics", "timeline"]),
            filter_params(query.to_params()),
        )
        .await
    }

    async fn get_profile_metrics_timeline_by_id(
        &self,
        profile_id: &str,
        metric_id: &str,
        query: TimelineQuery,
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Getting timeline of metric {} for profile {}", metric_id, profile_id);
        self.v1_request(
            Method::GET,
            resource_path(&[PERSON, profile_id, "metric", metric_id, "timeline"]),
            filter_params(query.to_params()),
        )
        .await
    }
}
