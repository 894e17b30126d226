//! Client configuration: the API host and the static credential.

use crate::resource::Resource;

/// Environment variable naming the API host, e.g. `https://stats.example.com`.
pub const HOST_ENV: &str = "SELLERSTATS_HOST";
/// Environment variable naming the API key forwarded in request payloads.
pub const API_KEY_ENV: &str = "SELLERSTATS_API_KEY";

/// Host and credential for one API deployment.
///
/// Both values are optional: a [`Config`] with no host resolves no endpoint
/// URLs, and a missing key simply means callers have nothing to forward in
/// the payload's `key` field.
#[derive(Clone, Debug, Default)]
pub struct Config {
    host: Option<String>,
    api_key: Option<String>,
}

impl Config {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the host and API key from the environment, loading a `.env`
    /// file first when one is present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        Self {
            host: std::env::var(HOST_ENV).ok(),
            api_key: std::env::var(API_KEY_ENV).ok(),
        }
    }

    /// Sets the API host (scheme and authority, no trailing path).
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = Some(host.to_string());
        self
    }

    /// Sets the static API key.
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Returns the collection URL for a resource, `<host>/api/<resource>`,
    /// or `None` when no host is configured.
    pub fn endpoint_url(&self, resource: Resource) -> Option<String> {
        self.host
            .as_ref()
            .map(|host| format!("{}/api/{}", host, resource))
    }

    /// The configured host, if any.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// The static API key callers forward as the payload's `key` field. The
    /// client itself treats it as an opaque string.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }
}
