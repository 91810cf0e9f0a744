// Copyright (c) 2025 - Cowboy AI, Inc.
//! Configuration for the feed source and carousel

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::errors::{ShowcaseError, ShowcaseResult};

/// Delay between two automatic carousel advances
pub const DEFAULT_ADVANCE_INTERVAL: Duration = Duration::from_millis(5000);

/// Configuration for the remote feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedSourceConfig {
    /// Location of the JSON event feed
    pub url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for FeedSourceConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3000/events.json".to_string(),
            timeout_secs: default_timeout(),
        }
    }
}

impl FeedSourceConfig {
    /// Request timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Configuration for the carousel component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselConfig {
    /// Time a slide stays on screen without interaction
    pub advance_interval: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            advance_interval: DEFAULT_ADVANCE_INTERVAL,
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShowcaseConfig {
    /// Feed source settings
    pub feed: FeedSourceConfig,
    /// Carousel settings
    pub carousel: CarouselConfig,
}

impl ShowcaseConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `SHOWCASE_FEED_URL`, `SHOWCASE_FEED_TIMEOUT_SECS` and
    /// `SHOWCASE_ADVANCE_MS`, falling back to defaults for unset variables.
    pub fn from_env() -> ShowcaseResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> ShowcaseResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("SHOWCASE_FEED_URL") {
            if url.trim().is_empty() {
                return Err(ShowcaseError::Configuration(
                    "SHOWCASE_FEED_URL is empty".to_string(),
                ));
            }
            config.feed.url = url;
        }

        if let Some(raw) = lookup("SHOWCASE_FEED_TIMEOUT_SECS") {
            config.feed.timeout_secs = parse_number("SHOWCASE_FEED_TIMEOUT_SECS", &raw)?;
        }

        if let Some(raw) = lookup("SHOWCASE_ADVANCE_MS") {
            let millis = parse_number("SHOWCASE_ADVANCE_MS", &raw)?;
            if millis == 0 {
                return Err(ShowcaseError::Configuration(
                    "SHOWCASE_ADVANCE_MS must be positive".to_string(),
                ));
            }
            config.carousel.advance_interval = Duration::from_millis(millis);
        }

        Ok(config)
    }
}

fn parse_number(key: &str, raw: &str) -> ShowcaseResult<u64> {
    raw.trim()
        .parse()
        .map_err(|e| ShowcaseError::Configuration(format!("{key}={raw:?}: {e}")))
}
