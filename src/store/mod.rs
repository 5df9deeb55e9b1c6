//! # Directory Store
//!
//! The reactive state container owned by the top-level view.
//!
//! ## Structure
//!
//! - [`state`] - [`DirectoryState`], the pure reducer over page state and criteria
//! - [`actor`] - [`DirectoryActor`], the task that owns the state and runs fetches
//! - [`client`] - [`DirectoryClient`], the typed handle the presentation layer uses
//! - [`message`] - [`DirectoryRequest`], the channel protocol between them
//! - [`error`] - [`DirectoryError`]
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use user_directory::model::{sample_users, SortField};
//! use user_directory::source::MockPageSource;
//! use user_directory::store::DirectoryActor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut source = MockPageSource::new();
//!     source.expect_fetch(1).return_ok(sample_users(), Some(1));
//!
//!     let (actor, client) = DirectoryActor::new(32);
//!     tokio::spawn(actor.run(Arc::new(source)));
//!     client.loaded().await?;
//!
//!     let view = client.search("bluth").await?;
//!     assert_eq!(view.displayed[0].last_name, "Bluth");
//!
//!     let view = client.toggle_sort(SortField::FirstName).await?;
//!     assert_eq!(view.displayed.len(), 1);
//!     Ok(())
//! }
//! ```

pub mod actor;
pub mod client;
pub mod error;
pub mod message;
pub mod state;

pub use actor::*;
pub use client::*;
pub use error::*;
pub use message::*;
pub use state::*;
