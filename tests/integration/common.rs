// Common utilities for integration tests

use klaviyo_client::prelude::*;
use mockito::ServerGuard;

pub const PUBLIC_TOKEN: &str = "qw123qw123qw123";
pub const PRIVATE_TOKEN: &str = "pk_flintstones";

/// Creates a client pointed at the mock server, with both tokens
pub fn create_test_client(server: &ServerGuard) -> Client {
    setup_logger();
    let mut config = Config::new(
        Credentials::new(Some(PUBLIC_TOKEN.into()), Some(PRIVATE_TOKEN.into())).unwrap(),
    );
    config.rest_api.base_url = format!("{}/api", server.url());
    Client::from_config(config).unwrap()
}
