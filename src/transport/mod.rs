/// HTTP transport trait and its `reqwest` implementation
pub mod http_client;
