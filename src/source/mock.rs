//! # Mock Page Source & Testing Guide
//!
//! [`MockPageSource`] implements [`PageSource`] entirely in memory. Queue the
//! fetches you expect, say what each one returns, then call
//! [`MockPageSource::verify`] at the end of the test.
//!
//! | Feature | MockPageSource | HttpPageSource |
//! |---------|----------------|----------------|
//! | **Speed** | Instant | Network bound |
//! | **Determinism** | Full, including response timing | Subject to the server |
//! | **Error Injection** | `return_err` | Needs a misbehaving server |
//!
//! ## Immediate responses
//!
//! ```rust
//! use user_directory::model::User;
//! use user_directory::source::{fetch_page_or_fallback, MockPageSource, SourceError};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockPageSource::new();
//!     mock.expect_fetch(1)
//!         .return_err(SourceError::Status { status: 500, body: String::new() });
//!
//!     let page = fetch_page_or_fallback(&mock, 1).await;
//!     assert!(page.is_fallback);
//!     mock.verify();
//! }
//! ```
//!
//! ## Deferred responses
//!
//! [`FetchExpectationBuilder::defer`] hands back a [`DeferredPage`]; the fetch
//! stays pending until the test resolves it. This is how out-of-order
//! responses are staged. [`MockPageSource::wait_for_completed`] then waits
//! until the resolved fetch has returned to its caller.

use crate::model::{PageState, User};
use crate::source::{PageSource, SourceError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::{oneshot, watch};

type FetchResult = Result<PageState, SourceError>;

enum Reply {
    Ready(FetchResult),
    Deferred(oneshot::Receiver<FetchResult>),
}

struct Expectation {
    page_number: u32,
    reply: Reply,
}

#[derive(Default)]
struct MockState {
    expectations: VecDeque<Expectation>,
    requested: Vec<u32>,
    mismatches: Vec<String>,
}

fn lock(state: &Mutex<MockState>) -> MutexGuard<'_, MockState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A page source with expectation tracking for fluent testing.
///
/// Clones share the same expectation queue.
#[derive(Clone)]
pub struct MockPageSource {
    state: Arc<Mutex<MockState>>,
    completed: Arc<watch::Sender<usize>>,
}

impl Default for MockPageSource {
    fn default() -> Self {
        let (completed, _) = watch::channel(0);
        Self {
            state: Arc::default(),
            completed: Arc::new(completed),
        }
    }
}

impl MockPageSource {
    /// Creates a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expects the next fetch to ask for `page_number`.
    pub fn expect_fetch(&mut self, page_number: u32) -> FetchExpectationBuilder {
        FetchExpectationBuilder {
            page_number,
            state: self.state.clone(),
        }
    }

    /// Page numbers requested so far, in call order.
    pub fn requested_pages(&self) -> Vec<u32> {
        lock(&self.state).requested.clone()
    }

    pub fn fetch_count(&self) -> usize {
        lock(&self.state).requested.len()
    }

    /// Waits until `count` fetches have returned, deferred ones included.
    pub async fn wait_for_completed(&self, count: usize) {
        let mut completed = self.completed.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = completed.wait_for(|done| *done >= count).await;
    }

    /// Panics unless every expectation was consumed by a matching fetch.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.mismatches.is_empty() {
            panic!("Unexpected fetches: {}", state.mismatches.join("; "));
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

#[async_trait]
impl PageSource for MockPageSource {
    async fn fetch_page(&self, page_number: u32) -> FetchResult {
        let expectation = {
            let mut state = lock(&self.state);
            state.requested.push(page_number);
            let expectation = state.expectations.pop_front();
            match &expectation {
                None => state
                    .mismatches
                    .push(format!("page {page_number} with no expectation")),
                Some(e) if e.page_number != page_number => state.mismatches.push(format!(
                    "page {page_number} while expecting page {}",
                    e.page_number
                )),
                Some(_) => {}
            }
            expectation
        };

        let result = match expectation.map(|e| e.reply) {
            Some(Reply::Ready(result)) => result,
            Some(Reply::Deferred(receiver)) => receiver.await.unwrap_or_else(|_| {
                Err(SourceError::Transport("deferred page dropped".to_string()))
            }),
            None => Err(SourceError::Transport("unexpected fetch".to_string())),
        };
        self.completed.send_modify(|done| *done += 1);
        result
    }
}

/// Builder for fetch expectations.
pub struct FetchExpectationBuilder {
    page_number: u32,
    state: Arc<Mutex<MockState>>,
}

impl FetchExpectationBuilder {
    fn push(self, reply: Reply) {
        lock(&self.state).expectations.push_back(Expectation {
            page_number: self.page_number,
            reply,
        });
    }

    /// Answers with a remote page built from `records`.
    pub fn return_ok(self, records: Vec<User>, total_pages: Option<u32>) {
        let page = PageState::remote(self.page_number, records, total_pages);
        self.push(Reply::Ready(Ok(page)));
    }

    /// Answers with a retrieval failure.
    pub fn return_err(self, error: SourceError) {
        self.push(Reply::Ready(Err(error)));
    }

    /// Leaves the fetch pending until the returned handle is resolved.
    pub fn defer(self) -> DeferredPage {
        let (sender, receiver) = oneshot::channel();
        let page_number = self.page_number;
        self.push(Reply::Deferred(receiver));
        DeferredPage {
            page_number,
            sender,
        }
    }
}

/// A pending fetch created by [`FetchExpectationBuilder::defer`].
pub struct DeferredPage {
    page_number: u32,
    sender: oneshot::Sender<FetchResult>,
}

impl DeferredPage {
    /// Completes the fetch with a remote page. Returns `false` if the fetch
    /// was already abandoned.
    pub fn resolve_ok(self, records: Vec<User>, total_pages: Option<u32>) -> bool {
        let page = PageState::remote(self.page_number, records, total_pages);
        self.sender.send(Ok(page)).is_ok()
    }

    pub fn resolve_err(self, error: SourceError) -> bool {
        self.sender.send(Err(error)).is_ok()
    }
}
