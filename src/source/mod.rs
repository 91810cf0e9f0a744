// Copyright (c) 2025 - Cowboy AI, Inc.
//! Feed Sources
//!
//! A [`FeedSource`] performs one retrieval of the feed document. The
//! [`DataStore`](crate::store::DataStore) decides *when* to call it; sources
//! never cache.
//!
//! - [`HttpFeedSource`] - GET on a fixed URL (feature `http`)
//! - [`StaticFeedSource`] - in-memory payload with optional latency

use async_trait::async_trait;

use crate::domain::Feed;
use crate::errors::FeedError;

pub mod fixed;
#[cfg(feature = "http")]
pub mod http;

pub use fixed::{StaticFeedSource, StaticPayload};
#[cfg(feature = "http")]
pub use http::HttpFeedSource;

/// One-shot retrieval of the feed document
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch and decode the feed
    async fn fetch(&self) -> Result<Feed, FeedError>;

    /// Human readable location, for logs
    fn describe(&self) -> String;
}
