//! # Observability & Tracing
//!
//! Structured logging for the directory, built on `tracing`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup and shutdown of the directory actor
//! - **Client Calls**: one span per [`DirectoryClient`](crate::store::DirectoryClient) method
//! - **Fetches**: a `fetch{page, generation}` span around each page retrieval
//! - **Fallbacks**: the concrete retrieval failure, at warn level
//!
//! The end user only ever sees the advisory banner; the failure cause lives
//! in these logs.
//!
//! ## Usage Examples
//!
//! ```bash
//! # Page loads, criteria changes, fallbacks
//! RUST_LOG=info cargo run
//!
//! # Request payloads, stale-page discards, HTTP status lines
//! RUST_LOG=debug cargo run
//!
//! # Only the source adapter
//! RUST_LOG=user_directory::source=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! With `RUST_LOG=info` and the endpoint unreachable:
//!
//! ```text
//! INFO Directory actor started
//! WARN fetch:fetch_page_or_fallback: Page fetch failed, using sample data page=1 error=Transport error: ...
//! INFO Page installed page=1 is_fallback=true displayed=6
//! INFO search: Criteria applied displayed=1 status=Populated
//! ```

/// Initializes the tracing subscriber.
///
/// Filtering comes from `RUST_LOG`; output uses the compact format without
/// module targets. Call once, from the binary.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Module paths add noise; spans carry the context
        .compact()
        .init();
}
