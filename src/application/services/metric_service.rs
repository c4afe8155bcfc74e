use crate::application::client::Client;
use crate::application::interfaces::metrics::MetricService;
use crate::error::KlaviyoError;
use crate::model::params::filter_params;
use crate::model::request::resource_path;
use crate::model::requests::{MetricExportRequest, Page, TimelineQuery};
use crate::model::response::ApiResponse;
use async_trait::async_trait;
use reqwest::Method;
use tracing::info;

const METRIC: &str = "metric";
const METRICS: &str = "metrics";
const TIMELINE: &str = "timeline";
const EXPORT: &str = "export";

#[async_trait]
impl MetricService for Client {
    async fn get_metrics(&self, page: Page) -> Result<ApiResponse, KlaviyoError> {
        info!("Getting metrics page {}", page.page);
        self.v1_request(Method::GET, resource_path(&[METRICS]), page.to_params())
            .await
    }

    async fn get_metrics_timeline(
        &self,
        query: TimelineQuery,
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Getting metrics timeline");
        self.v1_request(
            Method::GET,
            resource_path(&[METRICS, TIMELINE]),
            filter_params(query.to_params()),
        )
        .await
    }

    async fn get_metric_timeline_by_id(
        &self,
        metric_id: &str,
        query: TimelineQuery,
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Getting timeline of metric {}", metric_id);
        self.v1_request(
            Method::GET,
            resource_path(&[METRIC, metric_id, TIMELINE]),
            filter_params(query.to_params()),
        )
        .await
    }

    async fn get_metric_export(
        &self,
        metric_id: &str,
        request: MetricExportRequest,
    ) -> Result<ApiResponse, KlaviyoError> {
        info!("Exporting metric {}", metric_id);
        self.v1_request(
            Method::GET,
            resource_path(&[METRIC, metric_id, EXPORT]),
            filter_params(request.to_params(metric_id)),
        )
        .await
    }
}
