use crate::error::KlaviyoError;
use crate::model::params::Params;
use crate::model::response::ApiResponse;
use async_trait::async_trait;

/// Interface for the v2 list API
#[async_trait]
pub trait ListService: Send + Sync {
    /// Gets every list of the account
    async fn get_lists(&self) -> Result<ApiResponse, KlaviyoError>;

    /// Creates a list; the response carries the new `list_id`
    async fn create_list(&self, list_name: &str) -> Result<ApiResponse, KlaviyoError>;

    /// Gets a list by its id
    async fn get_list_by_id(&self, list_id: &str) -> Result<ApiResponse, KlaviyoError>;

    /// Renames a list
    async fn update_list_name_by_id(
        &self,
        list_id: &str,
        list_name: &str,
    ) -> Result<ApiResponse, KlaviyoError>;

    /// Deletes a list
    async fn delete_list(&self, list_id: &str) -> Result<ApiResponse, KlaviyoError>;

    /// Subscribes profiles to a list, honouring its opt-in settings
    ///
    /// Each profile is an object with at least an `email` or `phone_number`.
    async fn add_subscribers_to_list(
        &self,
        list_id: &str,
        profiles: Vec<Params>,
    ) -> Result<ApiResponse, KlaviyoError>;

    /// Checks which emails are subscribed to a list and not suppressed
    async fn get_subscribers_from_list(
        &self,
        list_id: &str,
        emails: &[String],
    ) -> Result<ApiResponse, KlaviyoError>;

    /// Unsubscribes emails from a list
    async fn delete_subscribers_from_list(
        &self,
        list_id: &str,
        emails: &[String],
    ) -> Result<ApiResponse, KlaviyoError>;

    /// Adds profiles to a list regardless of its opt-in settings
    async fn add_members_to_list(
        &self,
        list_id: &str,
        profiles: Vec<Params>,
    ) -> Result<ApiResponse, KlaviyoError>;

    /// Checks which emails are members of a list
    async fn get_members_from_list(
        &self,
        list_id: &str,
        emails: &[String],
    ) -> Result<ApiResponse, KlaviyoError>;

    /// Removes emails from a list
    async fn remove_members_from_list(
        &self,
        list_id: &str,
        emails: &[String],
    ) -> Result<ApiResponse, KlaviyoError>;

    /// Gets the emails excluded from a list, one page at a time
    async fn get_list_exclusions(
        &self,
        list_id: &str,
        marker: Option<u64>,
    ) -> Result<ApiResponse, KlaviyoError>;

    /// Gets every member of a list or segment, one page at a time
    async fn get_all_members(
        &self,
        group_id: &str,
        marker: Option<u64>,
    ) -> Result<ApiResponse, KlaviyoError>;
}
