use crate::application::client::Client;
use crate::application::interfaces::segments::SegmentService;
use crate::error::KlaviyoError;
use crate::model::params::Params;
use crate::model::request::resource_path;
use crate::model::response::ApiResponse;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::info;

#[async_trait]
impl SegmentService for Client {
    async fn get_segment_members(
        &self,
        segment_id: &str,
        emails: &[String],
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Checking {} emails in segment {}", emails.len(), segment_id);
        let mut params = Params::new();
        params.insert("email".to_string(), Value::from(emails.join(",")));
        self.v1_request(
            Method::GET,
            resource_path(&["segment", segment_id, "members"]),
            params,
        )
        .await
    }
}
