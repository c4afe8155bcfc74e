use crate::application::client::Client;
use crate::application::interfaces::data_privacy::DataPrivacyService;
use crate::error::KlaviyoError;
use crate::model::params::Params;
use crate::model::request::resource_path;
use crate::model::requests::DeletionIdType;
use crate::model::response::ApiResponse;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::info;

#[async_trait]
impl DataPrivacyService for Client {
    async fn request_profile_deletion(
        &self,
        identifier: &str,
        id_type: DeletionIdType,
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Requesting profile deletion by {}", id_type.as_str());
        let mut data = Params::new();
        data.insert(id_type.as_str().to_string(), Value::from(identifier));
        self.v2_request(
            Method::POST,
            resource_path(&["data-privacy", "deletion-request"]),
            data,
        )
        .await
    }
}
