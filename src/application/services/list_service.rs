use crate::application::client::Client;
use crate::application::interfaces::lists::ListService;
use crate::error::KlaviyoError;
use crate::model::params::{Params, build_marker_param};
use crate::model::request::resource_path;
use crate::model::response::ApiResponse;
use async_trait::async_trait;
use reqwest::Method;
use serde_json::Value;
use tracing::info;

const LIST: &str = "list";
const LISTS: &str = "lists";
const GROUP: &str = "group";
const SUBSCRIBE: &str = "subscribe";
const MEMBERS: &str = "members";
const EXCLUSIONS: &str = "exclusions";
const ALL: &str = "all";

fn list_name_param(list_name: &str) -> Params {
    let mut params = Params::new();
    params.insert("list_name".to_string(), Value::from(list_name));
    params
}

fn emails_param(emails: &[String]) -> Params {
    let mut params = Params::new();
    params.insert("emails".to_string(), Value::from(emails.to_vec()));
    params
}

fn profiles_param(profiles: Vec<Params>) -> Params {
    let mut params = Params::new();
    params.insert(
        "profiles".to_string(),
        Value::Array(profiles.into_iter().map(Value::Object).collect()),
    );
    params
}

#[async_trait]
impl ListService for Client {
    async fn get_lists(&self) -> Result<ApiResponse, KlaviyoError> {
        info!("Getting lists");
        self.v2_request(Method::GET, resource_path(&[LISTS]), Params::new())
            .await
    }

    async fn create_list(&self, list_name: &str) -> Result<ApiResponse, KlaviyoError> {
        info!("Creating list: {}", list_name);
        self.v2_request(
            Method::POST,
            resource_path(&[LISTS]),
            list_name_param(list_name),
        )
        .await
    }

    async fn get_list_by_id(&self, list_id: &str) -> Result<ApiResponse, KlaviyoError> {
        info!("Getting list: {}", list_id);
        self.v2_request(Method::GET, resource_path(&[LIST, list_id]), Params::new())
            .await
    }

    async fn update_list_name_by_id(
        &self,
        list_id: &str,
        list_name: &str,
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Renaming list {} to {}", list_id, list_name);
        self.v2_request(
            Method::PUT,
            resource_path(&[LIST, list_id]),
            list_name_param(list_name),
        )
        .await
    }

    async fn delete_list(&self, list_id: &str) -> Result<ApiResponse, KlaviyoError> {
        info!("Deleting list: {}", list_id);
        self.v2_request(
            Method::DELETE,
            resource_path(&[LIST, list_id]),
            Params::new(),
        )
        .await
    }

    async fn add_subscribers_to_list(
        &self,
        list_id: &str,
        profiles: Vec<Params>,
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Subscribing {} profiles to list {}", profiles.len(), list_id);
        self.v2_request(
            Method::POST,
            resource_path(&[LIST, list_id, SUBSCRIBE]),
            profiles_param(profiles),
        )
        .await
    }

    async fn get_subscribers_from_list(
        &self,
        list_id: &str,
        emails: &[String],
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Checking {} subscriptions on list {}", emails.len(), list_id);
        self.v2_request(
            Method::GET,
            resource_path(&[LIST, list_id, SUBSCRIBE]),
            emails_param(emails),
        )
        .await
    }

    async fn delete_subscribers_from_list(
        &self,
        list_id: &str,
        emails: &[String],
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Unsubscribing {} emails from list {}", emails.len(), list_id);
        self.v2_request(
            Method::DELETE,
            resource_path(&[LIST, list_id, SUBSCRIBE]),
            emails_param(emails),
        )
        .await
    }

    async fn add_members_to_list(
        &self,
        list_id: &str,
        profiles: Vec<Params>,
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Adding {} members to list {}", profiles.len(), list_id);
        self.v2_request(
            Method::POST,
            resource_path(&[LIST, list_id, MEMBERS]),
            profiles_param(profiles),
        )
        .await
    }

    async fn get_members_from_list(
        &self,
        list_id: &str,
        emails: &[String],
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Checking {} members on list {}", emails.len(), list_id);
        self.v2_request(
            Method::GET,
            resource_path(&[LIST, list_id, MEMBERS]),
            emails_param(emails),
        )
        .await
    }

    async fn remove_members_from_list(
        &self,
        list_id: &str,
        emails: &[String],
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Removing {} members from list {}", emails.len(), list_id);
        self.v2_request(
            Method::DELETE,
            resource_path(&[LIST, list_id, MEMBERS]),
            emails_param(emails),
        )
        .await
    }

    async fn get_list_exclusions(
        &self,
        list_id: &str,
        marker: Option<u64>,
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Getting exclusions of list {}", list_id);
        self.v2_request(
            Method::GET,
            resource_path(&[LIST, list_id, EXCLUSIONS, ALL]),
            build_marker_param(marker),
        )
        .await
    }

    async fn get_all_members(
        &self,
        group_id: &str,
        marker: Option<u64>,
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Getting all members of group {}", group_id);
        self.v2_request(
            Method::GET,
            resource_path(&[GROUP, group_id, MEMBERS, ALL]),
            build_marker_param(marker),
        )
        .await
    }
}
