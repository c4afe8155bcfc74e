/// Parameter filtering and payload encoding
pub mod params;
/// Request descriptors and URL assembly
pub mod request;
/// Typed request options for resource calls
pub mod requests;
/// Responses and response classification
pub mod response;
