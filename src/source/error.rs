//! Error types for page retrieval.

use thiserror::Error;

/// Why a page could not be retrieved from the remote endpoint.
///
/// Every variant ends the same way (fallback data plus the advisory banner);
/// the distinction exists for log output only.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The request could not be sent or the body could not be read.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The configured request timeout elapsed.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The server answered with a non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not a valid users envelope.
    #[error("Invalid payload: {0}")]
    Decode(String),

    /// The envelope carried an explicit `error` field.
    #[error("Server reported error: {0}")]
    Remote(String),

    /// The envelope had no usable `data` records.
    #[error("No data in response")]
    EmptyData,
}
