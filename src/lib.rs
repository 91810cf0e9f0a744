//! Event showcase: a fetch-once feed store and an auto-advancing carousel
//!
//! The [`DataStore`] retrieves the JSON event feed at most once per session
//! and broadcasts snapshots to any number of consumers. The [`Carousel`]
//! derives a most-recent-first view of the feed's focus events and rotates
//! through it on a restartable timer that manual selection overrides.
//!
//! ```text
//! FeedSource ──fetch──→ DataStore ──FeedSnapshot──→ Carousel ──CarouselView──→ renderers
//!                                                     ↑
//!                                              select_index(j)
//! ```

pub mod carousel;
pub mod config;
pub mod domain;
pub mod errors;
pub mod frp;
pub mod source;
pub mod state_machine;
pub mod store;

// Re-export commonly used types
pub use carousel::{Carousel, CarouselView, PaginationMarker, Slide};
pub use config::{CarouselConfig, FeedSourceConfig, ShowcaseConfig};
pub use domain::{Event, EventId, Feed};
pub use errors::{CarouselError, FeedError, ShowcaseError, ShowcaseResult};
pub use source::{FeedSource, StaticFeedSource};
pub use store::{DataStore, FeedSnapshot, FeedSubscription};
