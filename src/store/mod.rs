// Copyright (c) 2025 - Cowboy AI, Inc.
//! Session Data Store
//!
//! Single source of truth for the remote feed. The store owns the fetch
//! lifecycle and broadcasts [`FeedSnapshot`]s to any number of consumers.
//!
//! # Guarantees
//!
//! - At most one fetch is in flight. Concurrent `load()` / `ensure_loaded()`
//!   calls while `Unloaded` start exactly one fetch.
//! - Every `Loading` ends in exactly one of `Loaded` or `Failed`, even if
//!   the caller that started it goes away: the fetch runs on its own task.
//! - Once `Loaded` the store never fetches again until [`DataStore::invalidate`].
//!   A `Failed` store only retries when a caller explicitly calls `load()`.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use event_showcase::domain::Feed;
//! use event_showcase::source::StaticFeedSource;
//! use event_showcase::store::DataStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = DataStore::new(Arc::new(StaticFeedSource::feed(Feed::new(vec![], vec![]))));
//! let snapshot = store.load().await;
//! assert!(snapshot.is_loaded());
//! assert!(snapshot.last.is_none());
//! # }
//! ```

mod snapshot;

pub use snapshot::{FeedSnapshot, FeedSubscription};

use chrono::Utc;
use futures::FutureExt;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::Feed;
use crate::errors::FeedError;
use crate::frp::Behavior;
use crate::source::FeedSource;
use crate::state_machine::{LoadInput, LoadStatus, StateMachineWithHistory, Transition};

/// Who is asking for a fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FetchTrigger {
    /// Consumer mount: only an `Unloaded` store may start fetching
    Mount,
    /// Caller-initiated `load()`: also retries a `Failed` store
    Explicit,
}

struct StoreInner {
    session: Uuid,
    source: Arc<dyn FeedSource>,
    /// Guards every status change and the publish that goes with it
    lifecycle: Mutex<StateMachineWithHistory<LoadStatus>>,
    state: watch::Sender<FeedSnapshot>,
    fetches: AtomicUsize,
}

/// Cheaply cloneable handle to the session's feed store
#[derive(Clone)]
pub struct DataStore {
    inner: Arc<StoreInner>,
}

impl fmt::Debug for DataStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataStore")
            .field("session", &self.inner.session)
            .field("source", &self.inner.source.describe())
            .field("status", &self.status())
            .finish()
    }
}

impl DataStore {
    /// Create an unloaded store over `source`
    pub fn new(source: Arc<dyn FeedSource>) -> Self {
        let (state, _) = watch::channel(FeedSnapshot::default());
        let session = Uuid::now_v7();

        debug!(%session, source = %source.describe(), "Data store created");

        Self {
            inner: Arc::new(StoreInner {
                session,
                source,
                lifecycle: Mutex::new(StateMachineWithHistory::new(LoadStatus::Unloaded)),
                state,
                fetches: AtomicUsize::new(0),
            }),
        }
    }

    /// Load the feed unless it is loaded or loading already
    ///
    /// Waits for the terminal state and returns it. From `Failed` this is
    /// the explicit retry.
    pub async fn load(&self) -> FeedSnapshot {
        let mut subscription = self.subscribe();

        if self.status() != LoadStatus::Loaded {
            self.start_fetch(FetchTrigger::Explicit);
        }

        match subscription.settled().await {
            Some(snapshot) => snapshot,
            None => self.snapshot(),
        }
    }

    /// Consumer mount hook
    ///
    /// Starts a background fetch only from `Unloaded`; returns whether this
    /// call started it. Must be called from within a tokio runtime.
    pub fn ensure_loaded(&self) -> bool {
        self.start_fetch(FetchTrigger::Mount)
    }

    /// Forget the loaded feed or error so the next `load()` fetches again
    ///
    /// Ignored while a fetch is in flight.
    pub fn invalidate(&self) -> bool {
        let mut lifecycle = self.lifecycle();
        if let Err(e) = lifecycle.transition_with_history(LoadInput::Invalidate, Utc::now()) {
            debug!(session = %self.inner.session, error = %e, "Invalidate ignored");
            return false;
        }

        self.inner.state.send_modify(|snapshot| {
            let had_feed = snapshot.data.is_some();
            snapshot.status = LoadStatus::Unloaded;
            snapshot.data = None;
            snapshot.error = None;
            snapshot.last = None;
            if had_feed {
                snapshot.revision += 1;
            }
        });

        info!(session = %self.inner.session, "Feed invalidated");
        true
    }

    /// Current snapshot
    pub fn snapshot(&self) -> FeedSnapshot {
        self.inner.state.borrow().clone()
    }

    pub fn status(&self) -> LoadStatus {
        self.inner.state.borrow().status
    }

    /// New observer handle
    pub fn subscribe(&self) -> FeedSubscription {
        FeedSubscription::new(self.inner.state.subscribe())
    }

    /// Continuous view of the latest snapshot
    pub fn behavior(&self) -> Behavior<FeedSnapshot> {
        Behavior::from_watch(self.inner.state.subscribe())
    }

    pub fn session_id(&self) -> Uuid {
        self.inner.session
    }

    /// Number of fetches the store has started
    pub fn fetch_count(&self) -> usize {
        self.inner.fetches.load(Ordering::SeqCst)
    }

    /// Accepted status transitions, oldest first
    pub fn transitions(&self) -> Vec<Transition<LoadStatus, LoadInput>> {
        self.lifecycle().get_history().to_vec()
    }

    fn lifecycle(&self) -> MutexGuard<'_, StateMachineWithHistory<LoadStatus>> {
        self.inner
            .lifecycle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Claim `Loading` and spawn the fetch; false if already claimed
    ///
    /// The status check and the claim happen under one lock, so a mount
    /// racing a fetch that fails fast never restarts it from `Failed`.
    fn start_fetch(&self, trigger: FetchTrigger) -> bool {
        {
            let mut lifecycle = self.lifecycle();
            let current = *lifecycle.current_state();
            if trigger == FetchTrigger::Mount && current != LoadStatus::Unloaded {
                debug!(session = %self.inner.session, status = %current, "Mount fetch skipped");
                return false;
            }
            if let Err(e) = lifecycle.transition_with_history(LoadInput::Begin, Utc::now()) {
                debug!(session = %self.inner.session, reason = %e, "Fetch not started");
                return false;
            }

            self.inner.state.send_modify(|snapshot| {
                snapshot.status = LoadStatus::Loading;
                snapshot.error = None;
            });
        }

        let call = self.inner.fetches.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            session = %self.inner.session,
            source = %self.inner.source.describe(),
            call,
            "Fetching feed"
        );

        let store = self.clone();
        tokio::spawn(async move {
            let result = AssertUnwindSafe(store.inner.source.fetch())
                .catch_unwind()
                .await
                .unwrap_or_else(|_| Err(FeedError::Transport("feed source panicked".to_string())));
            store.settle(result);
        });

        true
    }

    fn settle(&self, result: Result<Feed, FeedError>) {
        let mut lifecycle = self.lifecycle();
        let input = match &result {
            Ok(_) => LoadInput::Resolve,
            Err(_) => LoadInput::Reject,
        };

        if let Err(e) = lifecycle.transition_with_history(input, Utc::now()) {
            warn!(session = %self.inner.session, error = %e, "Dropping fetch result");
            return;
        }

        match result {
            Ok(feed) => {
                info!(
                    session = %self.inner.session,
                    events = feed.events.len(),
                    focus = feed.focus.len(),
                    "Feed loaded"
                );
                let last = feed.last().cloned();
                self.inner.state.send_modify(|snapshot| {
                    snapshot.status = LoadStatus::Loaded;
                    snapshot.data = Some(Arc::new(feed));
                    snapshot.error = None;
                    snapshot.last = last;
                    snapshot.revision += 1;
                });
            }
            Err(error) => {
                warn!(session = %self.inner.session, %error, "Feed load failed");
                self.inner.state.send_modify(|snapshot| {
                    snapshot.status = LoadStatus::Failed;
                    snapshot.error = Some(Arc::new(error));
                });
            }
        }
    }
}
