//! # cloudshare-client
//!
//! HTTP client for the CloudShare share API. Every response body is
//! decoded at the wire boundary and normalized into the canonical
//! [`Share`](cloudshare_entity::share::Share) form, so nothing above
//! this crate ever sees raw wire keys.

pub mod endpoint;
pub mod shares;

use std::time::Duration;

use reqwest::{Method, RequestBuilder};

use cloudshare_core::config::api::ApiConfig;
use cloudshare_core::error::{AppError, ErrorKind};
use cloudshare_core::result::AppResult;

/// A client for one platform instance.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    webroot: String,
    username: Option<String>,
    password: Option<String>,
}

impl ApiClient {
    /// Build a client from configuration.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    "Failed to build HTTP client",
                    e,
                )
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            webroot: config.webroot().trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The root URL used when synthesizing public share links.
    pub fn webroot(&self) -> &str {
        &self.webroot
    }

    /// Start a request with authentication and the OCS header applied.
    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, url)
            .header("OCS-APIRequest", "true");
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_deref());
        }
        request
    }
}
