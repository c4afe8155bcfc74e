/// Campaign interface
pub mod campaigns;
/// Data privacy interface
pub mod data_privacy;
/// List interface
pub mod lists;
/// Metric interface
pub mod metrics;
/// Profile interface
pub mod profiles;
/// Public tracking interface
pub mod public;
/// Segment interface
pub mod segments;
