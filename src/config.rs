//! Runtime settings for the directory.
//!
//! Everything has a default; [`DirectoryConfig::from_json`] overrides any
//! subset of fields from a JSON document.

use crate::render::Layout;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://reqres.in/api/users";
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid configuration document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Could not build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DirectoryConfig {
    /// Paginated users endpoint; `?page=<n>` is appended per request.
    pub endpoint: String,
    /// Request channel capacity of the directory actor.
    pub channel_capacity: usize,
    /// Per-request timeout in milliseconds. `None` waits as long as the
    /// transport does.
    pub request_timeout_ms: Option<u64>,
    pub layout: Layout,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            request_timeout_ms: None,
            layout: Layout::default(),
        }
    }
}

impl DirectoryConfig {
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(document)?)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sub-millisecond remainders are dropped; the result is at least 1ms.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self.request_timeout_ms = Some(millis.max(1));
        self
    }

    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.endpoint).map_err(|source| ConfigError::InvalidEndpoint {
            endpoint: self.endpoint.clone(),
            source,
        })
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }

    /// Channel capacity, never zero (tokio rejects zero-capacity channels).
    pub fn channel_capacity(&self) -> usize {
        self.channel_capacity.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DirectoryConfig::default();
        assert_eq!(config.endpoint_url().unwrap().as_str(), DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout(), None);
        assert_eq!(config.channel_capacity(), 32);
        assert_eq!(config.layout, Layout::Table);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config =
            DirectoryConfig::from_json(r#"{"request_timeout_ms": 5000, "layout": "cards"}"#).unwrap();
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.layout, Layout::Cards);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_request_timeout_keeps_fractional_seconds() {
        for millis in [250, 1500, 30_000] {
            let timeout = Duration::from_millis(millis);
            let config = DirectoryConfig::default().with_request_timeout(timeout);
            assert_eq!(config.request_timeout(), Some(timeout));
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = DirectoryConfig::from_json(r#"{"retries": 3}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_bad_endpoint_is_reported() {
        let config = DirectoryConfig::default().with_endpoint("not a url");
        assert!(matches!(
            config.endpoint_url(),
            Err(ConfigError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let config = DirectoryConfig {
            channel_capacity: 0,
            ..DirectoryConfig::default()
        };
        assert_eq!(config.channel_capacity(), 1);
    }
}
