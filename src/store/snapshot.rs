// Copyright (c) 2025 - Cowboy AI, Inc.
//! Published store state

use std::sync::Arc;
use tokio::sync::watch;

use crate::domain::{Event, Feed};
use crate::errors::FeedError;
use crate::state_machine::LoadStatus;

/// Read-only view of the store at one moment
///
/// `data` is present only when `status` is `Loaded`, `error` only when it
/// is `Failed`. `revision` changes every time the published feed reference
/// changes, which is what display components key their recomputation on.
#[derive(Debug, Clone, Default)]
pub struct FeedSnapshot {
    pub status: LoadStatus,
    pub data: Option<Arc<Feed>>,
    pub error: Option<Arc<FeedError>>,
    /// Last event of `events` in stored order
    pub last: Option<Event>,
    pub revision: u64,
}

impl FeedSnapshot {
    pub fn is_loaded(&self) -> bool {
        self.status == LoadStatus::Loaded
    }

    pub fn is_failed(&self) -> bool {
        self.status == LoadStatus::Failed
    }

    /// Carousel-eligible events, empty unless loaded
    pub fn focus(&self) -> &[Event] {
        self.data.as_deref().map(|feed| feed.focus.as_slice()).unwrap_or(&[])
    }

    /// All events, empty unless loaded
    pub fn events(&self) -> &[Event] {
        self.data.as_deref().map(|feed| feed.events.as_slice()).unwrap_or(&[])
    }
}

/// Observer handle on the store
///
/// Any number of subscriptions can exist; none of them triggers a fetch.
#[derive(Debug, Clone)]
pub struct FeedSubscription {
    receiver: watch::Receiver<FeedSnapshot>,
}

impl FeedSubscription {
    pub(crate) fn new(receiver: watch::Receiver<FeedSnapshot>) -> Self {
        Self { receiver }
    }

    /// Latest published snapshot, marking it seen
    pub fn current(&mut self) -> FeedSnapshot {
        self.receiver.borrow_and_update().clone()
    }

    /// Wait for the next published snapshot
    ///
    /// Returns `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<FeedSnapshot> {
        self.receiver.changed().await.ok()?;
        Some(self.receiver.borrow_and_update().clone())
    }

    /// Wait until the feed reference differs from `revision`
    pub async fn feed_changed_since(&mut self, revision: u64) -> Option<FeedSnapshot> {
        let snapshot = self
            .receiver
            .wait_for(|snapshot| snapshot.revision != revision)
            .await
            .ok()?;
        Some(snapshot.clone())
    }

    /// Wait until the store reaches `Loaded` or `Failed`
    pub async fn settled(&mut self) -> Option<FeedSnapshot> {
        let snapshot = self
            .receiver
            .wait_for(|snapshot| snapshot.status.is_terminal())
            .await
            .ok()?;
        Some(snapshot.clone())
    }
}
