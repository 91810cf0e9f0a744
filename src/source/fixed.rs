// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory feed source

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::debug;

use super::FeedSource;
use crate::domain::Feed;
use crate::errors::FeedError;

/// What a [`StaticFeedSource`] answers with
#[derive(Debug, Clone)]
pub enum StaticPayload {
    /// An already decoded feed
    Feed(Feed),
    /// Raw JSON, decoded on every fetch
    Json(String),
    /// Fail as if the network were unreachable
    TransportFailure(String),
}

/// Feed source serving a fixed payload
///
/// Counts its fetches so callers can check how often the store went out
/// to the source.
#[derive(Debug)]
pub struct StaticFeedSource {
    payload: StaticPayload,
    latency: Duration,
    fetches: AtomicUsize,
}

impl StaticFeedSource {
    pub fn new(payload: StaticPayload) -> Self {
        Self {
            payload,
            latency: Duration::ZERO,
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn feed(feed: Feed) -> Self {
        Self::new(StaticPayload::Feed(feed))
    }

    pub fn json(json: impl Into<String>) -> Self {
        Self::new(StaticPayload::Json(json.into()))
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self::new(StaticPayload::TransportFailure(reason.into()))
    }

    /// Delay every fetch by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Number of fetches started so far
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    async fn fetch(&self) -> Result<Feed, FeedError> {
        let call = self.fetches.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(call, latency_ms = self.latency.as_millis() as u64, "Static feed fetch");

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match &self.payload {
            StaticPayload::Feed(feed) => Ok(feed.clone()),
            StaticPayload::Json(json) => Feed::from_json(json),
            StaticPayload::TransportFailure(reason) => Err(FeedError::Transport(reason.clone())),
        }
    }

    fn describe(&self) -> String {
        "static feed".to_string()
    }
}
