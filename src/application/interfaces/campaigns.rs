use crate::error::KlaviyoError;
use crate::model::requests::{Page, RecipientsQuery};
use crate::model::response::ApiResponse;
use async_trait::async_trait;

/// Interface for the v1 campaign API
#[async_trait]
pub trait CampaignService: Send + Sync {
    /// Gets campaigns, newest first
    async fn get_campaigns(&self, page: Page) -> Result<ApiResponse, KlaviyoError>;

    /// Gets the recipients of a campaign with their status
    async fn get_campaign_recipients(
        &self,
        campaign_id: &str,
        query: RecipientsQuery,
    ) -> Result<ApiResponse, KlaviyoError>;
}
