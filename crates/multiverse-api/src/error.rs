use thiserror::Error;

use crate::query::QueryKey;

/// Errors returned by [`ApiClient`](crate::ApiClient).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection, TLS, timeout or body read failure.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered 404, e.g. an unknown id or a filter with no results.
    #[error("{key} not found: {message}")]
    NotFound { key: QueryKey, message: String },

    /// Any other non-success status.
    #[error("API error for {key} (status {status_code}): {message}")]
    Api {
        key: QueryKey,
        status_code: u16,
        message: String,
    },

    /// The body did not match the expected shape.
    #[error("failed to decode response at `{path}`: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL is not an http(s) URL.
    #[error("invalid base URL: {0:?}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Returns `true` if the API reported the resource as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
