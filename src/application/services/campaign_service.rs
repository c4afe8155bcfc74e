use crate::application::client::Client;
use crate::application::interfaces::campaigns::CampaignService;
use crate::error::KlaviyoError;
use crate::model::params::filter_params;
use crate::model::request::resource_path;
use crate::model::requests::{Page, RecipientsQuery};
use crate::model::response::ApiResponse;
use async_trait::async_trait;
use reqwest::Method;
use tracing::info;

#[async_trait]
impl CampaignService for Client {
    async fn get_campaigns(&self, page: Page) -> Result<ApiResponse, KlaviyoError> {
        info!("Getting campaigns page {}", page.page);
        self.v1_request(Method::GET, resource_path(&["campaigns"]), page.to_params())
            .await
    }

    async fn get_campaign_recipients(
        &self,
        campaign_id: &str,
        query: RecipientsQuery,
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Getting recipients of campaign {}", campaign_id);
        self.v1_request(
            Method::GET,
            resource_path(&["campaign", campaign_id, "recipients"]),
            filter_params(query.to_params()),
        )
        .await
    }
}
