// Copyright (c) 2025 - Cowboy AI, Inc.
//! Auto-Advancing Carousel
//!
//! Shows the feed's focus events most recent first, one at a time. Every
//! `advance_interval` without interaction it moves to the next event,
//! wrapping around; a manual selection jumps immediately and restarts the
//! countdown. When the store publishes a new feed the list is rebuilt and
//! the countdown restarts against it.
//!
//! # Lifecycle
//!
//! ```text
//! mount ──→ driver task ──→ unmount / drop
//!             │  owns CarouselState and the single advance timer
//!             └─ publishes CarouselView on every transition
//! ```
//!
//! Tearing the carousel down cancels the pending timer; a feed that
//! arrives afterwards is never applied to it.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use event_showcase::carousel::Carousel;
//! use event_showcase::config::CarouselConfig;
//! use event_showcase::domain::Feed;
//! use event_showcase::source::StaticFeedSource;
//! use event_showcase::store::DataStore;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = DataStore::new(Arc::new(StaticFeedSource::feed(Feed::new(vec![], vec![]))));
//! let carousel = Carousel::mount(&store, CarouselConfig::default());
//! store.load().await;
//! assert!(carousel.view().is_empty());
//! carousel.unmount().await;
//! # }
//! ```

mod driver;
mod view;

pub use view::{CarouselView, PaginationMarker, Slide};

use std::fmt;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::CarouselConfig;
use crate::errors::CarouselError;
use crate::frp::Behavior;
use crate::store::DataStore;
use driver::{Command, Driver};

/// A mounted carousel
///
/// Dropping the handle aborts the driver; [`Carousel::unmount`] stops it
/// gracefully.
pub struct Carousel {
    id: Uuid,
    commands: mpsc::UnboundedSender<Command>,
    view: watch::Receiver<CarouselView>,
    driver: Option<JoinHandle<()>>,
}

impl fmt::Debug for Carousel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let view = self.view.borrow();
        f.debug_struct("Carousel")
            .field("id", &self.id)
            .field("state", &view.state())
            .field("items", &view.item_count())
            .finish()
    }
}

impl Carousel {
    /// Mount a carousel over `store`
    ///
    /// Triggers the store's initial load if nobody has yet. Must be called
    /// from within a tokio runtime.
    pub fn mount(store: &DataStore, config: CarouselConfig) -> Self {
        let id = Uuid::now_v7();
        let (commands, command_rx) = mpsc::unbounded_channel();

        let (driver, view) = Driver::new(id, config.advance_interval, store.subscribe(), command_rx);
        let started = store.ensure_loaded();

        info!(
            carousel = %id,
            session = %store.session_id(),
            started_fetch = started,
            "Carousel mounted"
        );

        Self {
            id,
            commands,
            view,
            driver: Some(tokio::spawn(driver.run())),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current display state
    pub fn view(&self) -> CarouselView {
        self.view.borrow().clone()
    }

    /// Receiver notified on every published view
    pub fn watch(&self) -> watch::Receiver<CarouselView> {
        self.view.clone()
    }

    /// Continuous view of the display state
    pub fn behavior(&self) -> Behavior<CarouselView> {
        Behavior::from_watch(self.view.clone())
    }

    /// Jump to item `index` and restart the countdown
    pub fn select_index(&self, index: usize) -> Result<(), CarouselError> {
        let len = {
            let view = self.view.borrow();
            if view.is_empty() {
                return Err(CarouselError::Empty);
            }
            view.item_count()
        };

        if index >= len {
            return Err(CarouselError::IndexOutOfRange { index, len });
        }

        self.commands
            .send(Command::Select(index))
            .map_err(|_| CarouselError::Closed)
    }

    /// Stop the driver and wait for it to finish
    pub async fn unmount(mut self) {
        let _ = self.commands.send(Command::Shutdown);
        if let Some(driver) = self.driver.take() {
            if let Err(e) = driver.await {
                warn!(carousel = %self.id, error = %e, "Carousel driver did not stop cleanly");
            }
        }
        info!(carousel = %self.id, "Carousel unmounted");
    }
}

impl Drop for Carousel {
    fn drop(&mut self) {
        if let Some(driver) = self.driver.take() {
            driver.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unmount_survives_panicked_driver() {
        let (commands, _command_rx) = mpsc::unbounded_channel();
        let (_view_tx, view) = watch::channel(CarouselView::default());
        let carousel = Carousel {
            id: Uuid::now_v7(),
            commands,
            view,
            driver: Some(tokio::spawn(async { panic!("driver bug") })),
        };

        carousel.unmount().await;
    }

    #[tokio::test]
    async fn test_select_on_stopped_carousel_is_closed() {
        let (commands, command_rx) = mpsc::unbounded_channel();
        drop(command_rx);
        let items: std::sync::Arc<[crate::domain::Event]> = std::sync::Arc::from(vec![
            crate::domain::Event::new(1, chrono::Utc::now(), "only"),
        ]);
        let (_view_tx, view) = watch::channel(CarouselView::new(
            crate::state_machine::CarouselState::Displaying { index: 0, len: 1 },
            items,
            1,
        ));
        let carousel = Carousel {
            id: Uuid::now_v7(),
            commands,
            view,
            driver: None,
        };

        assert_eq!(carousel.select_index(0), Err(CarouselError::Closed));
    }
}
