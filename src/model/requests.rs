use crate::constants::{
    DEFAULT_PAGE_SIZE, DEFAULT_RECIPIENTS_COUNT, DEFAULT_STARTING_PAGE, DEFAULT_TIMELINE_COUNT,
};
use crate::error::KlaviyoError;
use crate::model::params::{Params, Timestamp};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

/// Sort order for timeline and recipient endpoints
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    /// Oldest first
    Asc,
    /// Newest first
    #[default]
    Desc,
}

impl Sort {
    /// Wire value of the sort order
    pub fn as_str(&self) -> &'static str {
        match self {
            Sort::Asc => "asc",
            Sort::Desc => "desc",
        }
    }
}

/// Timeline cursor: the `next` value of a previous call, or a Unix timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Since {
    /// Unix epoch seconds
    Timestamp(i64),
    /// Opaque cursor returned by a previous page
    Cursor(String),
}

impl From<i64> for Since {
    fn from(value: i64) -> Self {
        Since::Timestamp(value)
    }
}

impl From<&str> for Since {
    fn from(value: &str) -> Self {
        Since::Cursor(value.to_string())
    }
}

impl From<String> for Since {
    fn from(value: String) -> Self {
        Since::Cursor(value)
    }
}

impl From<&Since> for Value {
    fn from(value: &Since) -> Self {
        match value {
            Since::Timestamp(ts) => Value::from(*ts),
            Since::Cursor(cursor) => Value::String(cursor.clone()),
        }
    }
}

/// Options of the public `track` call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackOptions {
    /// Email address of the profile
    pub email: Option<String>,
    /// External id of the profile
    pub external_id: Option<String>,
    /// Event properties
    pub properties: Params,
    /// Profile properties
    pub customer_properties: Params,
    /// When the event happened
    pub timestamp: Option<Timestamp>,
    /// IP address of the customer
    pub ip_address: Option<String>,
    /// Marks the call as a test call
    pub is_test: bool,
}

impl TrackOptions {
    /// Creates empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the profile email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the profile external id
    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    /// Adds an event property
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Adds a profile property
    pub fn customer_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.customer_properties.insert(key.into(), value.into());
        self
    }

    /// Sets the event time
    pub fn timestamp(mut self, timestamp: impl Into<Timestamp>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Sets the customer IP address
    pub fn ip_address(mut self, ip_address: impl Into<String>) -> Self {
        self.ip_address = Some(ip_address.into());
        self
    }

    /// Marks the call as a test call
    pub fn test(mut self, is_test: bool) -> Self {
        self.is_test = is_test;
        self
    }
}

/// Options of the public `identify` call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentifyOptions {
    /// Email address of the profile
    pub email: Option<String>,
    /// External id of the profile
    pub external_id: Option<String>,
    /// Profile properties
    pub properties: Params,
    /// Marks the call as a test call
    pub is_test: bool,
}

impl IdentifyOptions {
    /// Creates empty options
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the profile email
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the profile external id
    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.external_id = Some(external_id.into());
        self
    }

    /// Adds a profile property
    pub fn property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Marks the call as a test call
    pub fn test(mut self, is_test: bool) -> Self {
        self.is_test = is_test;
        self
    }
}

/// Paging of v1 list endpoints
#[derive(DebugPretty, DisplaySimple, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    /// Zero based page index
    pub page: u32,
    /// Page size
    pub count: u32,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: DEFAULT_STARTING_PAGE,
            count: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Page {
    /// Query parameters of the page
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("page".to_string(), Value::from(self.page));
        params.insert("count".to_string(), Value::from(self.count));
        params
    }
}

/// Query of the timeline endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct TimelineQuery {
    /// Cursor or timestamp to start from
    pub since: Option<Since>,
    /// Number of events to return
    pub count: u32,
    /// Sort order
    pub sort: Sort,
}

impl Default for TimelineQuery {
    fn default() -> Self {
        Self {
            since: None,
            count: DEFAULT_TIMELINE_COUNT,
            sort: Sort::Desc,
        }
    }
}

impl TimelineQuery {
    /// Creates the default query: newest first, 100 events
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the timeline at a cursor or timestamp
    pub fn since(mut self, since: impl Into<Since>) -> Self {
        self.since = Some(since.into());
        self
    }

    /// Sets the number of events
    pub fn count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Sets the sort order
    pub fn sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    /// Query parameters; `since` is `null` when unset
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("count".to_string(), Value::from(self.count));
        params.insert("sort".to_string(), Value::from(self.sort.as_str()));
        params.insert(
            "since".to_string(),
            self.since.as_ref().map(Value::from).unwrap_or(Value::Null),
        );
        params
    }
}

/// Query of the campaign recipients endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct RecipientsQuery {
    /// Number of recipients to return
    pub count: u32,
    /// `next_offset` of a previous page
    pub offset: Option<String>,
    /// Sort order
    pub sort: Sort,
}

impl Default for RecipientsQuery {
    fn default() -> Self {
        Self {
            count: DEFAULT_RECIPIENTS_COUNT,
            offset: None,
            sort: Sort::Asc,
        }
    }
}

impl RecipientsQuery {
    /// Query parameters; `offset` is `null` when unset
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        params.insert("count".to_string(), Value::from(self.count));
        params.insert("sort".to_string(), Value::from(self.sort.as_str()));
        params.insert(
            "offset".to_string(),
            self.offset.clone().map(Value::String).unwrap_or(Value::Null),
        );
        params
    }
}

/// Time bucket of a metric export
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MetricUnit {
    /// Daily buckets
    Day,
    /// Weekly buckets
    Week,
    /// Monthly buckets
    Month,
}

impl MetricUnit {
    /// Wire value of the unit
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricUnit::Day => "day",
            MetricUnit::Week => "week",
            MetricUnit::Month => "month",
        }
    }
}

/// Options of a metric export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricExportRequest {
    /// Beginning of the query, `YYYY-MM-DD`
    pub start_date: Option<String>,
    /// End of the query, `YYYY-MM-DD`
    pub end_date: Option<String>,
    /// Bucket size
    pub unit: Option<MetricUnit>,
    /// Measurement to fetch, e.g. `"unique"` or `["sum", "Item Count"]`
    pub measurement: Option<Value>,
    /// Conditions filtering the events
    pub where_clause: Option<Value>,
    /// Property to segment by
    pub by: Option<String>,
    /// Number of segments to return
    pub count: Option<u32>,
}

impl MetricExportRequest {
    /// Query parameters for the given metric; unset options are `null`
    ///
    /// `measurement` and `where` are sent as JSON text.
    pub fn to_params(&self, metric_id: &str) -> Params {
        let json_text = |v: &Option<Value>| match v {
            Some(Value::String(s)) => Value::String(s.clone()),
            Some(other) => Value::String(other.to_string()),
            None => Value::Null,
        };
        let mut params = Params::new();
        params.insert("metric_id".to_string(), Value::from(metric_id));
        params.insert("start_date".to_string(), Value::from(self.start_date.clone()));
        params.insert("end_date".to_string(), Value::from(self.end_date.clone()));
        params.insert(
            "unit".to_string(),
            Value::from(self.unit.map(|u| u.as_str())),
        );
        params.insert("measurement".to_string(), json_text(&self.measurement));
        params.insert("where".to_string(), json_text(&self.where_clause));
        params.insert("by".to_string(), Value::from(self.by.clone()));
        params.insert("count".to_string(), Value::from(self.count));
        params
    }
}

/// Kind of identifier accepted by a data-privacy deletion request
#[derive(Debug, Clone, Copy, DisplaySimple, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeletionIdType {
    /// Email address
    #[default]
    Email,
    /// Phone number in E.164 format
    PhoneNumber,
    /// Klaviyo person id
    PersonId,
}

impl DeletionIdType {
    /// Every accepted identifier kind
    pub const ALL: [DeletionIdType; 3] = [
        DeletionIdType::Email,
        DeletionIdType::PhoneNumber,
        DeletionIdType::PersonId,
    ];

    /// Body key of the identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            DeletionIdType::Email => "email",
            DeletionIdType::PhoneNumber => "phone_number",
            DeletionIdType::PersonId => "person_id",
        }
    }
}

impl FromStr for DeletionIdType {
    type Err = KlaviyoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DeletionIdType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = DeletionIdType::ALL.iter().map(|t| t.as_str()).collect();
                KlaviyoError::Configuration(format!(
                    "Invalid id_type provided. Valid types are: {}",
                    valid.join(", ")
                ))
            })
    }
}
