//! Share API endpoint configuration.

use serde::{Deserialize, Serialize};

/// Settings for reaching the share HTTP API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the platform instance, without a trailing slash.
    pub base_url: String,
    /// Root URL used when synthesizing public share links.
    ///
    /// Defaults to `base_url` when unset; see [`ApiConfig::webroot`].
    #[serde(default)]
    pub webroot: Option<String>,
    /// Username for basic authentication.
    #[serde(default)]
    pub username: Option<String>,
    /// Password for basic authentication.
    #[serde(default)]
    pub password: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl ApiConfig {
    /// The root URL for public share links, falling back to `base_url`.
    pub fn webroot(&self) -> &str {
        self.webroot.as_deref().unwrap_or(&self.base_url)
    }
}

fn default_request_timeout() -> u64 {
    30
}
