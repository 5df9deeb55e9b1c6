//! # System Lifecycle
//!
//! Starting, wiring and stopping the directory, plus logging setup.
//!
//! ## The DirectorySystem Pattern
//!
//! [`DirectorySystem`] creates the [`DirectoryActor`](crate::store::DirectoryActor)
//! without dependencies, then injects the page source when spawning its run
//! loop:
//!
//! ```rust,ignore
//! let (actor, client) = DirectoryActor::new(config.channel_capacity());
//! let handle = tokio::spawn(actor.run(source));
//! ```
//!
//! Production code passes an [`HttpPageSource`](crate::source::HttpPageSource);
//! tests pass a [`MockPageSource`](crate::source::MockPageSource) through
//! [`DirectorySystem::with_source`].
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the client** - closes the request channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - the join handle reports panics
//!
//! In-flight fetch tasks hold only a weak sender and never keep the actor
//! alive.

pub mod directory_system;
pub mod tracing;

pub use directory_system::*;
pub use tracing::*;
