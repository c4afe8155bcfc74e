use crate::error::KlaviyoError;
use crate::model::response::ApiResponse;
use async_trait::async_trait;

/// Interface for the v1 segment API
#[async_trait]
pub trait SegmentService: Send + Sync {
    /// Checks which emails are in a segment
    ///
    /// A profile outside the segment and an unknown profile look the same.
    /// The API accepts at most 100 emails per call.
    async fn get_segment_members(
        &self,
        segment_id: &str,
        emails: &[String],
    ) -> Result<ApiResponse, KlaviyoError>;
}
