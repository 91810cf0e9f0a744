//! Error types for feed loading and carousel operations

use thiserror::Error;

/// Errors that can occur while retrieving or decoding the event feed
///
/// These never escape the [`DataStore`](crate::store::DataStore) as failures;
/// they are captured into the `Failed` snapshot so consumers can render a
/// placeholder while the cause stays available for diagnostics.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Network, DNS, timeout or HTTP status failure reaching the feed
    #[error("Feed transport error: {0}")]
    Transport(String),

    /// Body is not JSON or lacks required fields
    #[error("Feed format error: {0}")]
    Format(String),

    /// Feed source could not be built from its configuration
    #[error("Feed configuration error: {0}")]
    Configuration(String),
}

impl FeedError {
    /// True for failures reaching the feed source
    pub fn is_transport(&self) -> bool {
        matches!(self, FeedError::Transport(_))
    }

    /// True for failures decoding the feed payload
    pub fn is_format(&self) -> bool {
        matches!(self, FeedError::Format(_))
    }
}

impl From<serde_json::Error> for FeedError {
    fn from(err: serde_json::Error) -> Self {
        FeedError::Format(err.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FeedError::Format(err.to_string())
        } else {
            FeedError::Transport(err.to_string())
        }
    }
}

/// Errors returned by the carousel's selection surface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// There is nothing to select
    #[error("Carousel has no items")]
    Empty,

    /// Requested index is outside the current list
    #[error("Index {index} out of range for {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    /// The carousel has been unmounted
    #[error("Carousel is closed")]
    Closed,
}

/// Errors that can occur in showcase operations
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// Feed retrieval error
    #[error(transparent)]
    Feed(#[from] FeedError),

    /// Carousel interaction error
    #[error(transparent)]
    Carousel(#[from] CarouselError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for showcase operations
pub type ShowcaseResult<T> = Result<T, ShowcaseError>;
