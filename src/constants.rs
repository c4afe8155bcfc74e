/// Default base URL for every Klaviyo API call
pub const DEFAULT_API_BASE_URL: &str = "https://a.klaviyo.com/api";
/// User agent string used in HTTP requests to identify this client to the Klaviyo API
pub const USER_AGENT: &str = concat!("klaviyo-client/", env!("CARGO_PKG_VERSION"));
/// Content type sent with every request, whatever the body encoding
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// Name of the private key parameter for v1 and v2 endpoints
pub const API_KEY_PARAM: &str = "api_key";
/// Name of the base64 payload parameter for the public endpoints
pub const DATA_PARAM: &str = "data";
/// Name of the test flag parameter for the public endpoints
pub const TEST_PARAM: &str = "test";
/// Pagination cursor parameter for list-style v2 endpoints
pub const MARKER_PARAM: &str = "marker";
/// Property flag that makes a tracked event count only once per profile
pub const TRACK_ONCE_KEY: &str = "__track_once__";
/// Default page for paginated v1 endpoints
pub const DEFAULT_STARTING_PAGE: u32 = 0;
/// Default page size for paginated v1 endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 50;
/// Default number of events returned by timeline endpoints
pub const DEFAULT_TIMELINE_COUNT: u32 = 100;
/// Default number of recipients returned per campaign recipients page
pub const DEFAULT_RECIPIENTS_COUNT: u32 = 5000;
/// Error message when neither an email nor an external id identifies a profile
pub const ERROR_MESSAGE_ID_AND_EMAIL: &str = "You must identify a user by email or ID.";
