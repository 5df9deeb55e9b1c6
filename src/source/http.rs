//! Reqwest-backed users endpoint adapter.
//!
//! Owns transport details only: request building, status mapping and
//! decoding of the `{ data, total_pages, error }` envelope.

use crate::model::{PageState, User};
use crate::source::{PageSource, SourceError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Wire shape of the users endpoint response.
///
/// `data` stays untyped until the error and emptiness checks have run, so
/// a non-list `data` is reported as missing data rather than a decode error.
#[derive(Debug, Deserialize)]
struct UsersEnvelopeDto {
    #[serde(default)]
    data: Option<serde_json::Value>,
    #[serde(default)]
    total_pages: Option<u32>,
    #[serde(default)]
    error: Option<String>,
}

/// Page source that issues `GET <endpoint>?page=<n>` requests.
pub struct HttpPageSource {
    client: Client,
    endpoint: Url,
}

impl HttpPageSource {
    /// Build an adapter with no request timeout beyond reqwest's defaults.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url) -> Result<Self, reqwest::Error> {
        Self::with_timeout(endpoint, None)
    }

    /// Build an adapter, optionally bounding each request by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_timeout(endpoint: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn page_url(&self, page_number: u32) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("page", &page_number.to_string());
        url
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, page_number: u32) -> Result<PageState, SourceError> {
        let url = self.page_url(page_number);
        debug!(%url, "Fetching");
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        debug!(status = status.as_u16(), "Response status");
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        parse_page(page_number, body.as_ref())
    }
}

/// Decodes a success body into a remote [`PageState`].
pub(crate) fn parse_page(page_number: u32, body: &[u8]) -> Result<PageState, SourceError> {
    let envelope: UsersEnvelopeDto = serde_json::from_slice(body)
        .map_err(|error| SourceError::Decode(format!("invalid users JSON payload: {error}")))?;

    if let Some(message) = envelope.error.filter(|message| !message.is_empty()) {
        return Err(SourceError::Remote(message));
    }

    let records = match envelope.data {
        Some(serde_json::Value::Array(items)) if !items.is_empty() => items
            .into_iter()
            .map(serde_json::from_value::<User>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| SourceError::Decode(format!("invalid user record: {error}")))?,
        _ => return Err(SourceError::EmptyData),
    };

    Ok(PageState::remote(page_number, records, envelope.total_pages))
}

fn map_transport_error(error: reqwest::Error) -> SourceError {
    if error.is_timeout() {
        SourceError::Timeout(error.to_string())
    } else {
        SourceError::Transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> SourceError {
    SourceError::Status {
        status: status.as_u16(),
        body: body_preview(body),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
