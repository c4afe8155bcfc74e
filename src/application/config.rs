use crate::constants::DEFAULT_API_BASE_URL;
use crate::error::{KlaviyoError, KlaviyoResult};
use crate::model::request::TokenKind;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Authentication tokens for the Klaviyo API
///
/// The public token authenticates the `track`/`identify` endpoints, the private
/// key everything else. At least one of them must be present; a call whose token
/// is missing fails when it is made.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    public_token: Option<String>,
    private_token: Option<String>,
}

impl Credentials {
    /// Creates credentials; empty strings count as absent
    ///
    /// # Errors
    /// [`KlaviyoError::Configuration`] when neither token is provided.
    pub fn new(public_token: Option<String>, private_token: Option<String>) -> KlaviyoResult<Self> {
        let public_token = public_token.filter(|t| !t.is_empty());
        let private_token = private_token.filter(|t| !t.is_empty());
        if public_token.is_none() && private_token.is_none() {
            return Err(KlaviyoError::Configuration(
                "no token provided: you must provide a public or private api token".to_string(),
            ));
        }
        Ok(Self {
            public_token,
            private_token,
        })
    }

    /// Credentials holding only the public token
    pub fn public(public_token: impl Into<String>) -> KlaviyoResult<Self> {
        Self::new(Some(public_token.into()), None)
    }

    /// Credentials holding only the private key
    pub fn private(private_token: impl Into<String>) -> KlaviyoResult<Self> {
        Self::new(None, Some(private_token.into()))
    }

    /// Whether a public token is configured
    pub fn has_public(&self) -> bool {
        self.public_token.is_some()
    }

    /// Whether a private key is configured
    pub fn has_private(&self) -> bool {
        self.private_token.is_some()
    }

    /// The public token, if configured
    pub fn public_token(&self) -> Option<&str> {
        self.public_token.as_deref()
    }

    /// The private key, if configured
    pub fn private_token(&self) -> Option<&str> {
        self.private_token.as_deref()
    }

    /// Returns the token a call needs
    ///
    /// # Errors
    /// [`KlaviyoError::Configuration`] when that token is not configured.
    pub fn require(&self, kind: TokenKind) -> KlaviyoResult<&str> {
        match kind {
            TokenKind::Public => self.public_token().ok_or_else(|| {
                KlaviyoError::Configuration("public token is not defined".to_string())
            }),
            TokenKind::Private => self.private_token().ok_or_else(|| {
                KlaviyoError::Configuration("private token is not defined".to_string())
            }),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redact = |t: &Option<String>| t.as_ref().map(|_| "***");
        f.debug_struct("Credentials")
            .field("public_token", &redact(&self.public_token))
            .field("private_token", &redact(&self.private_token))
            .finish()
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
/// Main configuration for the Klaviyo API client
pub struct Config {
    /// Authentication tokens
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Creates a configuration from credentials and the default base URL
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            rest_api: RestApiConfig::default(),
        }
    }

    /// Loads the configuration from the environment and an optional `.env` file
    ///
    /// Reads `KLAVIYO_PUBLIC_TOKEN`, `KLAVIYO_PRIVATE_TOKEN` and `KLAVIYO_API_BASE_URL`.
    ///
    /// # Errors
    /// [`KlaviyoError::Configuration`] when neither token is set.
    pub fn from_env() -> KlaviyoResult<Self> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let public_token: Option<String> = get_env_or_none("KLAVIYO_PUBLIC_TOKEN");
        let private_token: Option<String> = get_env_or_none("KLAVIYO_PRIVATE_TOKEN");
        if public_token.is_none() {
            debug!("KLAVIYO_PUBLIC_TOKEN not found in environment variables or .env file");
        }
        if private_token.is_none() {
            debug!("KLAVIYO_PRIVATE_TOKEN not found in environment variables or .env file");
        }

        Ok(Config {
            credentials: Credentials::new(public_token, private_token)?,
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "KLAVIYO_API_BASE_URL",
                    String::from(DEFAULT_API_BASE_URL),
                ),
            },
        })
    }
}
