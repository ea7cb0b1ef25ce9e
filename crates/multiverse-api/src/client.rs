use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::query::QueryKey;

/// Root of the public API.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";
pub const USER_AGENT: &str = concat!("multiverse/", env!("CARGO_PKG_VERSION"));

/// Settings used to build an [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `https://rickandmortyapi.com/api`.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the `User-Agent` header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Body the API sends alongside error statuses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the Rick and Morty REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the base URL is not http(s), or
    /// `ApiError::Request` if the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> crate::Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Self::with_client(client, &config.base_url)
    }

    /// Wraps an existing reqwest client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidBaseUrl` if the base URL is not http(s).
    pub fn with_client(client: Client, base_url: impl Into<String>) -> crate::Result<Self> {
        let base_url = base_url.into();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl(base_url));
        }
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The normalized API root.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, key: &QueryKey) -> String {
        format!("{}/{}", self.base_url, key.path())
    }

    /// Performs the request identified by `key` and decodes the body.
    pub(crate) async fn fetch<T: DeserializeOwned>(&self, key: &QueryKey) -> crate::Result<T> {
        debug!(%key, "fetching");
        let response = self
            .client
            .get(self.url(key))
            .query(&key.query_pairs())
            .send()
            .await?;
        self.handle_response(key, response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        key: &QueryKey,
        response: reqwest::Response,
    ) -> crate::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            warn!(%key, status = status.as_u16(), %message, "API returned an error");
            if status == reqwest::StatusCode::NOT_FOUND {
                return Err(ApiError::NotFound {
                    key: key.clone(),
                    message,
                });
            }
            return Err(ApiError::Api {
                key: key.clone(),
                status_code: status.as_u16(),
                message,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| ApiError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
