use crate::error::KlaviyoError;
use crate::model::requests::{MetricExportRequest, Page, TimelineQuery};
use crate::model::response::ApiResponse;
use async_trait::async_trait;

/// Interface for the v1 metric API
#[async_trait]
pub trait MetricService: Send + Sync {
    /// Gets the metrics of the account
    async fn get_metrics(&self, page: Page) -> Result<ApiResponse, KlaviyoError>;

    /// Gets the events of every metric
    async fn get_metrics_timeline(&self, query: TimelineQuery)
    -> Result<ApiResponse, KlaviyoError>;

    /// Gets the events of one metric
    async fn get_metric_timeline_by_id(
        &self,
        metric_id: &str,
        query: TimelineQuery,
    ) -> Result<ApiResponse, KlaviyoError>;

    /// Exports counts, uniques or totals of a metric
    async fn get_metric_export(
        &self,
        metric_id: &str,
        request: MetricExportRequest,
    ) -> Result<ApiResponse, KlaviyoError>;
}
