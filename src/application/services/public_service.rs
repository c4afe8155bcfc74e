use crate::application::client::Client;
use crate::application::interfaces::public::PublicService;
use crate::constants::{ERROR_MESSAGE_ID_AND_EMAIL, TRACK_ONCE_KEY};
use crate::error::KlaviyoError;
use crate::model::params::{Params, build_public_query_string, filter_params, normalize_timestamp};
use crate::model::request::{PublicEndpoint, RequestDescriptor};
use crate::model::requests::{IdentifyOptions, TrackOptions};
use crate::model::response::ApiResponse;
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

/// Checks that a profile can be identified by email or external id
fn valid_identifiers(email: Option<&str>, external_id: Option<&str>) -> Result<(), KlaviyoError> {
    let present = |v: Option<&str>| v.is_some_and(|s| !s.is_empty());
    if !present(email) && !present(external_id) {
        return Err(KlaviyoError::Configuration(
            ERROR_MESSAGE_ID_AND_EMAIL.to_string(),
        ));
    }
    Ok(())
}

/// Merges the identifiers into a property map under `email` and `id`
fn merge_identifiers(properties: &mut Params, email: Option<String>, external_id: Option<String>) {
    if let Some(email) = email.filter(|e| !e.is_empty()) {
        properties.insert("email".to_string(), Value::String(email));
    }
    if let Some(id) = external_id.filter(|i| !i.is_empty()) {
        properties.insert("id".to_string(), Value::String(id));
    }
}

#[async_trait]
impl PublicService for Client {
    async fn track(&self, event: &str, options: TrackOptions) -> Result<ApiResponse, KlaviyoError> {
        valid_identifiers(options.email.as_deref(), options.external_id.as_deref())?;
        let token = self.public_token()?;
        info!("Tracking event: {}", event);

        let TrackOptions {
            email,
            external_id,
            properties,
            mut customer_properties,
            timestamp,
            ip_address,
            is_test,
        } = options;
        merge_identifiers(&mut customer_properties, email, external_id);

        let mut params = Params::new();
        params.insert("token".to_string(), Value::from(token));
        params.insert("event".to_string(), Value::from(event));
        params.insert("properties".to_string(), Value::Object(properties));
        params.insert(
            "customer_properties".to_string(),
            Value::Object(customer_properties),
        );
        params.insert(
            "time".to_string(),
            Value::from(timestamp.map(normalize_timestamp)),
        );
        params.insert(
            "ip".to_string(),
            Value::from(ip_address.filter(|ip| !ip.is_empty())),
        );

        let query = build_public_query_string(&filter_params(params), is_test)?;
        let response = self
            .execute(RequestDescriptor::public(PublicEndpoint::Track, query))
            .await?;
        debug!("Track accepted: {}", response.is_success_flag());
        Ok(response)
    }

    async fn track_once(
        &self,
        event: &str,
        mut options: TrackOptions,
    ) -> Result<ApiResponse, KlaviyoError> {
        options
            .properties
            .insert(TRACK_ONCE_KEY.to_string(), Value::Bool(true));
        self.track(event, options).await
    }

    async fn identify(&self, options: IdentifyOptions) -> Result<ApiResponse, KlaviyoError> {
        valid_identifiers(options.email.as_deref(), options.external_id.as_deref())?;
        let token = self.public_token()?;
        info!("Identifying profile");

        let IdentifyOptions {
            email,
            external_id,
            mut properties,
            is_test,
        } = options;
        merge_identifiers(&mut properties, email, external_id);

        let mut params = Params::new();
        params.insert("token".to_string(), Value::from(token));
        params.insert("properties".to_string(), Value::Object(properties));

        let query = build_public_query_string(&params, is_test)?;
        let response = self
            .execute(RequestDescriptor::public(PublicEndpoint::Identify, query))
            .await?;
        debug!("Identify accepted: {}", response.is_success_flag());
        Ok(response)
    }
}
