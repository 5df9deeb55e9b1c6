//! # Directory Messages
//!
//! Requests sent from [`DirectoryClient`](crate::store::DirectoryClient) to
//! [`DirectoryActor`](crate::store::DirectoryActor), plus the internal
//! completion message posted by fetch tasks.

use crate::model::{CriteriaChange, PageState};
use crate::store::{DirectoryError, DirectoryView, FetchTicket, Navigation};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the actor.
pub type Response<T> = oneshot::Sender<Result<T, DirectoryError>>;

#[derive(Debug)]
pub enum DirectoryRequest {
    /// Edit one criterion; answers with the recomputed view.
    Update {
        change: CriteriaChange,
        respond_to: Response<DirectoryView>,
    },
    /// Change page; answers with the view right after the decision (loading
    /// if a fetch started, unchanged otherwise).
    Navigate {
        navigation: Navigation,
        respond_to: Response<DirectoryView>,
    },
    Snapshot {
        respond_to: Response<DirectoryView>,
    },
    /// Posted by a fetch task when its page is ready.
    PageLoaded { ticket: FetchTicket, page: PageState },
}
