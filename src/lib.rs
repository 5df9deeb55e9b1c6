//! # User Directory
//!
//! > **A searchable, sortable view over one page of remote user records.**
//!
//! This crate fetches a paginated users list, substitutes bundled sample data
//! whenever the remote source fails, and derives the displayed subset from the
//! current search, filter and sort criteria.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### One owner for all view state
//!
//! The fetched page and the criteria live inside a single actor task. Every
//! change is a message; every answer is a freshly recomputed
//! [`DirectoryView`](store::DirectoryView). There is nothing to lock and no
//! incremental bookkeeping to get wrong: with at most one page of records in
//! memory, recomputing the view in full is cheap.
//!
//! ### Retrieval never fails
//!
//! [`fetch_page_or_fallback`](source::fetch_page_or_fallback) is total. A
//! network error, a bad status, malformed JSON, a server-reported error and an
//! empty `data` array all end the same way: the sample slice plus an advisory
//! banner. The specific cause is logged, never shown.
//!
//! ### Stale pages are dropped
//!
//! Each page change tags its fetch with a generation number. A response that
//! arrives after a newer page was requested is discarded instead of
//! overwriting the newer state.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Data ([`model`])
//! [`User`](model::User), [`PageState`](model::PageState),
//! [`Criteria`](model::Criteria) and the bundled
//! [`SAMPLE_USERS`](model::SAMPLE_USERS).
//!
//! ### 2. The Reducer ([`view`])
//! [`derive_displayed`](view::derive_displayed): search, domain filter, letter
//! filter, stable sort.
//!
//! ### 3. The Adapter ([`source`])
//! The [`PageSource`](source::PageSource) seam, the reqwest-backed
//! [`HttpPageSource`](source::HttpPageSource) and the test
//! [`MockPageSource`](source::MockPageSource).
//!
//! ### 4. The Container ([`store`])
//! [`DirectoryActor`](store::DirectoryActor) and its typed
//! [`DirectoryClient`](store::DirectoryClient).
//!
//! ### 5. The Screen ([`render`])
//! Loading, empty and populated frames, the fallback banner and pagination.
//!
//! ### 6. The Orchestrator ([`lifecycle`], [`config`])
//! [`DirectorySystem`](lifecycle::DirectorySystem) wiring and
//! [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo against the live endpoint
//! RUST_LOG=info cargo run
//!
//! cargo test
//! ```

pub mod config;
pub mod lifecycle;
pub mod model;
pub mod render;
pub mod source;
pub mod store;
pub mod view;
