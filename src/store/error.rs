//! Error types for the directory actor and its client.

use crate::model::CriteriaError;
use thiserror::Error;

/// Errors a [`DirectoryClient`](crate::store::DirectoryClient) call can return.
///
/// Data retrieval never shows up here; it is absorbed by the fallback.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryError {
    /// The actor has stopped and no longer accepts requests.
    #[error("Directory actor closed")]
    ActorClosed,

    /// The actor dropped the response channel before answering.
    #[error("Directory actor dropped response channel")]
    ActorDropped,

    #[error(transparent)]
    InvalidCriteria(#[from] CriteriaError),

    /// The actor task panicked or was cancelled.
    #[error("Directory actor task failed: {0}")]
    TaskFailed(String),
}
