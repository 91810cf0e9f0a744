// Copyright (c) 2025 - Cowboy AI, Inc.
//! HTTP feed source
//!
//! ```rust,no_run
//! use event_showcase::config::FeedSourceConfig;
//! use event_showcase::source::{FeedSource, HttpFeedSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = HttpFeedSource::new(FeedSourceConfig {
//!         url: "http://localhost:3000/events.json".to_string(),
//!         timeout_secs: 10,
//!     })?;
//!
//!     let feed = source.fetch().await?;
//!     println!("{} events", feed.events.len());
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};

use super::FeedSource;
use crate::config::FeedSourceConfig;
use crate::domain::Feed;
use crate::errors::FeedError;

/// Feed source issuing a GET to a fixed URL
#[derive(Debug, Clone)]
pub struct HttpFeedSource {
    config: FeedSourceConfig,
    client: Client,
}

impl HttpFeedSource {
    /// Build a source for the configured endpoint
    pub fn new(config: FeedSourceConfig) -> Result<Self, FeedError> {
        reqwest::Url::parse(&config.url)
            .map_err(|e| FeedError::Configuration(format!("Invalid feed URL {}: {}", config.url, e)))?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| FeedError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        info!("Feed source configured for {}", config.url);

        Ok(Self { config, client })
    }

    pub fn url(&self) -> &str {
        &self.config.url
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self) -> Result<Feed, FeedError> {
        debug!(url = %self.config.url, "GET feed");

        let response = self
            .client
            .get(&self.config.url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Transport(format!(
                "GET {} returned {}",
                self.config.url, status
            )));
        }

        let body = response.bytes().await?;
        debug!(url = %self.config.url, bytes = body.len(), "Feed body received");

        Feed::from_slice(&body)
    }

    fn describe(&self) -> String {
        self.config.url.clone()
    }
}
