//! # Directory Actor
//!
//! The explicit state container behind the directory view. It owns the
//! [`DirectoryState`], processes [`DirectoryRequest`]s one at a time, and
//! publishes every recomputed [`DirectoryView`] on a watch channel.
//!
//! ## Fetch Flow
//!
//! A page change never blocks the loop. The actor bumps the fetch generation,
//! spawns one task that runs [`fetch_page_or_fallback`], and keeps serving
//! criteria edits. The task posts [`DirectoryRequest::PageLoaded`] back
//! through a weak sender; results from superseded generations are dropped.

use crate::source::{fetch_page_or_fallback, PageSource};
use crate::store::{DirectoryClient, DirectoryRequest, DirectoryState, DirectoryView, FetchTicket};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, Instrument};

/// The server half of the directory.
///
/// Create with [`DirectoryActor::new`], then spawn [`DirectoryActor::run`]
/// with the page source to use.
///
/// ```rust
/// use std::sync::Arc;
/// use user_directory::model::sample_users;
/// use user_directory::source::MockPageSource;
/// use user_directory::store::DirectoryActor;
///
/// #[tokio::main]
/// async fn main() {
///     let mut source = MockPageSource::new();
///     source.expect_fetch(1).return_ok(sample_users(), Some(2));
///
///     let (actor, client) = DirectoryActor::new(32);
///     tokio::spawn(actor.run(Arc::new(source)));
///
///     let view = client.loaded().await.unwrap();
///     assert_eq!(view.displayed.len(), 6);
/// }
/// ```
pub struct DirectoryActor {
    receiver: mpsc::Receiver<DirectoryRequest>,
    loopback: mpsc::WeakSender<DirectoryRequest>,
    views: watch::Sender<DirectoryView>,
    state: DirectoryState,
}

impl DirectoryActor {
    /// Creates a new `DirectoryActor` and its associated [`DirectoryClient`].
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the request channel. If the channel
    ///   is full, client calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, DirectoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let state = DirectoryState::new();
        let (views, view_receiver) = watch::channel(state.view());
        let actor = Self {
            receiver,
            loopback: sender.downgrade(),
            views,
            state,
        };
        let client = DirectoryClient::new(sender, view_receiver);
        (actor, client)
    }

    /// Runs the event loop until every client is dropped.
    ///
    /// The first page is requested immediately. `source` is injected here
    /// rather than in [`DirectoryActor::new`] so tests can wire a mock.
    pub async fn run(mut self, source: Arc<dyn PageSource>) {
        info!("Directory actor started");
        let ticket = self.state.begin_fetch();
        self.spawn_fetch(&source, ticket);
        self.publish();

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                DirectoryRequest::Update { change, respond_to } => {
                    debug!(?change, "Update");
                    self.state.apply(change);
                    let view = self.publish();
                    info!(
                        displayed = view.displayed.len(),
                        status = ?view.status,
                        "Criteria applied"
                    );
                    let _ = respond_to.send(Ok(view));
                }
                DirectoryRequest::Navigate {
                    navigation,
                    respond_to,
                } => {
                    debug!(?navigation, "Navigate");
                    match self.state.navigate(navigation) {
                        Some(ticket) => {
                            info!(page = ticket.page_number, "Page change");
                            self.spawn_fetch(&source, ticket);
                        }
                        None => debug!(page = self.state.current_page(), "Page unchanged"),
                    }
                    let _ = respond_to.send(Ok(self.publish()));
                }
                DirectoryRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.state.view()));
                }
                DirectoryRequest::PageLoaded { ticket, page } => {
                    let page_number = page.page_number;
                    let is_fallback = page.is_fallback;
                    if self.state.complete_fetch(ticket, page) {
                        let view = self.publish();
                        info!(
                            page = page_number,
                            is_fallback,
                            displayed = view.displayed.len(),
                            "Page installed"
                        );
                    } else {
                        debug!(
                            page = page_number,
                            generation = ticket.generation,
                            "Discarded stale page"
                        );
                    }
                }
            }
        }

        info!(page = self.state.current_page(), "Shutdown");
    }

    fn spawn_fetch(&self, source: &Arc<dyn PageSource>, ticket: FetchTicket) {
        let source = Arc::clone(source);
        let loopback = self.loopback.clone();
        let span = tracing::info_span!("fetch", page = ticket.page_number, generation = ticket.generation);
        tokio::spawn(
            async move {
                let page = fetch_page_or_fallback(source.as_ref(), ticket.page_number).await;
                // No strong sender left means the directory is shutting down.
                if let Some(sender) = loopback.upgrade() {
                    let _ = sender
                        .send(DirectoryRequest::PageLoaded { ticket, page })
                        .await;
                }
            }
            .instrument(span),
        );
    }

    fn publish(&self) -> DirectoryView {
        let view = self.state.view();
        self.views.send_replace(view.clone());
        view
    }
}
