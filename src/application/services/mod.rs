/// Campaign service implementation
pub mod campaign_service;
/// Data privacy service implementation
pub mod data_privacy_service;
/// List service implementation
pub mod list_service;
/// Metric service implementation
pub mod metric_service;
/// Profile service implementation
pub mod profile_service;
/// Public tracking service implementation
pub mod public_service;
/// Segment service implementation
pub mod segment_service;

pub use crate::application::interfaces::campaigns::*;
pub use crate::application::interfaces::data_privacy::*;
pub use crate::application::interfaces::lists::*;
pub use crate::application::interfaces::metrics::*;
pub use crate::application::interfaces::profiles::*;
pub use crate::application::interfaces::public::*;
pub use crate::application::interfaces::segments::*;
