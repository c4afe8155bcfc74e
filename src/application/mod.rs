/// Client and request dispatch
pub mod client;
/// Application configuration module
pub mod config;
/// Resource interfaces
pub mod interfaces;
/// Resource implementations on the client
pub mod services;
