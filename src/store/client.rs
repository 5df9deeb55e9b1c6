//! # Directory Client
//!
//! Provides a high-level API for interacting with the directory actor.
//! Every call is one message; the actor answers with the recomputed view.

use crate::model::{CriteriaChange, DomainFilter, LetterFilter, SortField, SortOrder};
use crate::store::{DirectoryError, DirectoryRequest, DirectoryView, Navigation, Response};
use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, instrument};

/// Client for interacting with the directory actor.
///
/// Cheap to clone. The actor stops once every clone is dropped.
#[derive(Clone)]
pub struct DirectoryClient {
    sender: mpsc::Sender<DirectoryRequest>,
    views: watch::Receiver<DirectoryView>,
}

impl DirectoryClient {
    pub fn new(sender: mpsc::Sender<DirectoryRequest>, views: watch::Receiver<DirectoryView>) -> Self {
        Self { sender, views }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(Response<T>) -> DirectoryRequest,
    ) -> Result<T, DirectoryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| DirectoryError::ActorClosed)?;
        response.await.map_err(|_| DirectoryError::ActorDropped)?
    }

    async fn update(&self, change: CriteriaChange) -> Result<DirectoryView, DirectoryError> {
        self.request(|respond_to| DirectoryRequest::Update { change, respond_to })
            .await
    }

    async fn navigate(&self, navigation: Navigation) -> Result<DirectoryView, DirectoryError> {
        self.request(|respond_to| DirectoryRequest::Navigate {
            navigation,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) -> Result<DirectoryView, DirectoryError> {
        debug!("Sending request");
        self.update(CriteriaChange::Search(term.to_string())).await
    }

    /// Accepts `all` or a domain, with or without the leading `@`.
    #[instrument(skip(self))]
    pub async fn filter_domain(&self, domain: &str) -> Result<DirectoryView, DirectoryError> {
        debug!("Sending request");
        self.update(CriteriaChange::Domain(DomainFilter::parse(domain)))
            .await
    }

    /// Accepts `all` or a single letter in either case.
    #[instrument(skip(self))]
    pub async fn filter_letter(&self, letter: &str) -> Result<DirectoryView, DirectoryError> {
        debug!("Sending request");
        let filter = LetterFilter::parse(letter)?;
        self.update(CriteriaChange::Letter(filter)).await
    }

    #[instrument(skip(self))]
    pub async fn sort_by(
        &self,
        field: SortField,
        order: SortOrder,
    ) -> Result<DirectoryView, DirectoryError> {
        debug!("Sending request");
        self.update(CriteriaChange::Sort { field, order }).await
    }

    /// Column-header click semantics, see [`Criteria::toggle_sort`](crate::model::Criteria::toggle_sort).
    #[instrument(skip(self))]
    pub async fn toggle_sort(&self, field: SortField) -> Result<DirectoryView, DirectoryError> {
        debug!("Sending request");
        self.update(CriteriaChange::ToggleSort(field)).await
    }

    #[instrument(skip(self))]
    pub async fn next_page(&self) -> Result<DirectoryView, DirectoryError> {
        debug!("Sending request");
        self.navigate(Navigation::Next).await
    }

    #[instrument(skip(self))]
    pub async fn previous_page(&self) -> Result<DirectoryView, DirectoryError> {
        debug!("Sending request");
        self.navigate(Navigation::Previous).await
    }

    #[instrument(skip(self))]
    pub async fn go_to_page(&self, page_number: u32) -> Result<DirectoryView, DirectoryError> {
        debug!("Sending request");
        self.navigate(Navigation::Page(page_number)).await
    }

    pub async fn snapshot(&self) -> Result<DirectoryView, DirectoryError> {
        self.request(|respond_to| DirectoryRequest::Snapshot { respond_to })
            .await
    }

    /// A receiver that observes every view the actor publishes.
    pub fn subscribe(&self) -> watch::Receiver<DirectoryView> {
        self.views.clone()
    }

    /// Waits until no fetch is in flight and returns that view.
    pub async fn loaded(&self) -> Result<DirectoryView, DirectoryError> {
        let mut views = self.views.clone();
        let view = views
            .wait_for(|view| !view.is_loading())
            .await
            .map_err(|_| DirectoryError::ActorClosed)?;
        Ok(view.clone())
    }
}
