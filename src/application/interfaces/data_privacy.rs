use crate::error::KlaviyoError;
use crate::model::requests::DeletionIdType;
use crate::model::response::ApiResponse;
use async_trait::async_trait;

/// Interface for the v2 data privacy API
#[async_trait]
pub trait DataPrivacyService: Send + Sync {
    /// Requests the deletion of the profile matching an email, phone number or person id
    ///
    /// When several profiles match, only one of them is deleted.
    async fn request_profile_deletion(
        &self,
        identifier: &str,
        id_type: DeletionIdType,
    ) -> Result<ApiResponse, KlaviyoError>;
}
