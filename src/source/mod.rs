//! # Data Source Adapter
//!
//! Retrieval of one page of users, with the sample-data fallback.
//!
//! ## Structure
//!
//! - [`PageSource`] - the seam between the directory actor and the network
//! - [`http`] - [`HttpPageSource`], the reqwest-backed implementation
//! - [`mock`] - [`MockPageSource`], an expectation-driven source for tests
//! - [`fetch_page_or_fallback`] - the total function the actor calls
//!
//! ## Fallback Policy
//!
//! One attempt per page change, no retries. Any [`SourceError`] is logged and
//! replaced by [`fallback_page`](crate::model::fallback_page).

pub mod error;
pub mod http;
pub mod mock;

pub use error::*;
pub use http::*;
pub use mock::*;

use crate::model::{fallback_page, PageState};
use async_trait::async_trait;
use tracing::{info, instrument, warn};

/// Anything that can produce one page of users.
#[async_trait]
pub trait PageSource: Send + Sync + 'static {
    /// Fetches `page_number` (1-based).
    ///
    /// Implementations return `is_fallback = false` pages only; fallback
    /// substitution is [`fetch_page_or_fallback`]'s job.
    async fn fetch_page(&self, page_number: u32) -> Result<PageState, SourceError>;
}

/// Fetches a page and never fails.
///
/// On error the cause is logged at warn level and the sample slice for
/// `page_number` is returned with `is_fallback = true`.
#[instrument(skip(source))]
pub async fn fetch_page_or_fallback(source: &dyn PageSource, page_number: u32) -> PageState {
    match source.fetch_page(page_number).await {
        Ok(page) => {
            info!(
                page = page.page_number,
                records = page.records.len(),
                total_pages = page.total_pages,
                "Page loaded"
            );
            page
        }
        Err(e) => {
            warn!(page = page_number, error = %e, "Page fetch failed, using sample data");
            fallback_page(page_number)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{sample_users, User};

    #[tokio::test]
    async fn test_remote_page_passes_through() {
        let mut mock = MockPageSource::new();
        let records = vec![User::new(7, "Michael", "Lawson", "m@reqres.in", "")];
        mock.expect_fetch(2).return_ok(records.clone(), Some(3));

        let page = fetch_page_or_fallback(&mock, 2).await;
        assert!(!page.is_fallback);
        assert_eq!(page.records, records);
        assert_eq!(page.total_pages, 3);
        mock.verify();
    }

    #[tokio::test]
    async fn test_server_error_becomes_fallback() {
        let mut mock = MockPageSource::new();
        mock.expect_fetch(1).return_err(SourceError::Status {
            status: 500,
            body: String::new(),
        });

        let page = fetch_page_or_fallback(&mock, 1).await;
        assert!(page.is_fallback);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.records, sample_users());
    }

    #[tokio::test]
    async fn test_timeout_becomes_fallback() {
        let mut mock = MockPageSource::new();
        mock.expect_fetch(1)
            .return_err(SourceError::Timeout("operation timed out".to_string()));

        let page = fetch_page_or_fallback(&mock, 1).await;
        assert!(page.is_fallback);
        assert_eq!(page.records.len(), 6);
    }
}
