//! AAP HTTP client for API interactions

use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::aap::auth::BasicAuth;
use crate::config::api;
use crate::error::{AapError, Result};

/// AAP API client
///
/// Owns the single HTTP session (connection pool, credentials, TLS policy)
/// for the lifetime of an inspection. Nothing mutates it after construction.
pub struct AapClient {
    client: Client,
    base_url: String,
    auth: BasicAuth,
}

impl AapClient {
    /// Create a new client for the instance at `base_url`
    ///
    /// `base_url` is the instance root, e.g. `https://aap.example.com`.
    pub fn new(base_url: &str, auth: BasicAuth, verify_tls: bool) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(AapError::Config(format!(
                "Invalid URL '{}': expected http:// or https:// scheme",
                base_url
            )));
        }

        if !verify_tls {
            debug!("TLS certificate verification disabled");
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(api::REQUEST_TIMEOUT_SECS))
            .danger_accept_invalid_certs(!verify_tls)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
            auth,
        })
    }

    /// Instance root the client was created with (no trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Root every endpoint is resolved against, e.g. `https://host/api/v2/`
    pub fn api_root(&self) -> String {
        format!("{}{}", self.base_url, api::BASE_PATH)
    }

    /// Build the full URL for an endpoint relative to the API root
    pub(crate) fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_root(), endpoint.trim_start_matches('/'))
    }

    /// Create a GET request builder with credentials and standard headers
    fn request(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .basic_auth(&self.auth.username, Some(&self.auth.password))
            .header("Content-Type", "application/json")
    }

    /// GET an endpoint relative to the API root and decode the JSON body
    ///
    /// Any non-success status becomes [`AapError::Api`] carrying the failed
    /// URL and the response body.
    pub async fn get<T>(&self, endpoint: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint);
        debug!("GET {}", url);

        let response = self.request(&url).send().await?;
        self.parse_api_response(response, &url).await
    }

    /// GET a single resource, returning `None` for 404
    pub async fn fetch_resource<T>(&self, endpoint: &str, resource_label: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint);
        debug!("Fetching {} from: {}", resource_label, url);

        let response = self.request(&url).send().await?;

        if response.status().as_u16() == 404 {
            debug!("{} not found", resource_label);
            return Ok(None);
        }

        self.parse_api_response(response, &url).await.map(Some)
    }

    /// Parse an API response, returning error for non-success status codes
    async fn parse_api_response<T>(&self, response: reqwest::Response, url: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AapError::Api {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
impl AapClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(
            base_url,
            BasicAuth::new("admin".to_string(), "secret".to_string()),
            true,
        )
        .unwrap()
    }
}
