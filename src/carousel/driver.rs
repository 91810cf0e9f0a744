// Copyright (c) 2025 - Cowboy AI, Inc.
//! Carousel driver task
//!
//! The driver is the only writer of the display state. It waits on three
//! sources and handles one wake-up at a time:
//!
//! ```text
//! commands (ManualSelect) ─┐
//! feed snapshots (Refresh) ├─→ CarouselState::transition ─→ timer + publish
//! advance timer (Advance) ─┘
//! ```
//!
//! The timer lives in a single `Option<Sleep>` slot, so at most one advance
//! can ever be pending; every transition either replaces or clears it.

use std::future::pending;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::{sleep_until, Instant, Sleep};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::view::CarouselView;
use crate::domain::{sort_by_date_desc, Event};
use crate::state_machine::{CarouselInput, CarouselOutput, CarouselState, StateMachine};
use crate::store::{FeedSnapshot, FeedSubscription};

#[derive(Debug)]
pub(crate) enum Command {
    Select(usize),
    Shutdown,
}

enum Wake {
    Command(Option<Command>),
    Feed(Option<FeedSnapshot>),
    Timer,
}

pub(crate) struct Driver {
    id: Uuid,
    interval: Duration,
    feed: FeedSubscription,
    feed_open: bool,
    commands: mpsc::UnboundedReceiver<Command>,
    view: watch::Sender<CarouselView>,
    state: CarouselState,
    items: Arc<[Event]>,
    revision: u64,
    timer: Option<Pin<Box<Sleep>>>,
    timer_generation: u64,
}

impl Driver {
    /// Build the driver from the store's current snapshot
    ///
    /// The initial refresh happens here so the view is valid before the
    /// task is spawned.
    pub(crate) fn new(
        id: Uuid,
        interval: Duration,
        mut feed: FeedSubscription,
        commands: mpsc::UnboundedReceiver<Command>,
    ) -> (Self, watch::Receiver<CarouselView>) {
        let snapshot = feed.current();
        let (view, receiver) = watch::channel(CarouselView::default());

        let mut driver = Self {
            id,
            interval,
            feed,
            feed_open: true,
            commands,
            view,
            state: CarouselState::Empty,
            items: Arc::from(Vec::new()),
            revision: snapshot.revision,
            timer: None,
            timer_generation: 0,
        };
        driver.refresh(&snapshot);

        (driver, receiver)
    }

    pub(crate) async fn run(mut self) {
        loop {
            let wake = tokio::select! {
                biased;
                command = self.commands.recv() => Wake::Command(command),
                snapshot = self.feed.changed(), if self.feed_open => Wake::Feed(snapshot),
                () = wait_timer(&mut self.timer) => Wake::Timer,
            };

            match wake {
                Wake::Command(Some(Command::Select(index))) => self.select(index),
                Wake::Command(Some(Command::Shutdown)) | Wake::Command(None) => break,
                Wake::Feed(Some(snapshot)) => {
                    if snapshot.revision != self.revision {
                        self.revision = snapshot.revision;
                        self.refresh(&snapshot);
                    }
                }
                Wake::Feed(None) => {
                    debug!(carousel = %self.id, "Feed store closed");
                    self.feed_open = false;
                }
                Wake::Timer => {
                    self.timer = None;
                    self.apply(CarouselInput::Advance);
                }
            }
        }

        self.timer = None;
        self.publish();
        info!(carousel = %self.id, "Carousel driver stopped");
    }

    fn refresh(&mut self, snapshot: &FeedSnapshot) {
        self.items = sort_by_date_desc(snapshot.focus()).into();
        debug!(
            carousel = %self.id,
            revision = snapshot.revision,
            status = %snapshot.status,
            len = self.items.len(),
            "Refreshing carousel items"
        );
        self.apply(CarouselInput::Refresh {
            len: self.items.len(),
        });
    }

    fn select(&mut self, index: usize) {
        if !self.state.can_transition(&CarouselInput::Select(index)) {
            warn!(carousel = %self.id, index, len = self.items.len(), "Ignoring stale selection");
            return;
        }
        self.apply(CarouselInput::Select(index));
    }

    fn apply(&mut self, input: CarouselInput) {
        match self.state.transition(&input) {
            Ok((next, output)) => {
                debug!(carousel = %self.id, ?input, from = ?self.state, to = ?next, "Carousel transition");
                self.state = next;
                match output {
                    CarouselOutput::Rearm => self.arm(),
                    CarouselOutput::Cancel => self.timer = None,
                }
            }
            Err(e) => warn!(carousel = %self.id, ?input, error = %e, "Carousel transition rejected"),
        }
        self.publish();
    }

    fn arm(&mut self) {
        let deadline = Instant::now() + self.interval;
        match self.timer.as_mut() {
            Some(sleep) => sleep.as_mut().reset(deadline),
            None => self.timer = Some(Box::pin(sleep_until(deadline))),
        }
        self.timer_generation += 1;
        debug!(
            carousel = %self.id,
            generation = self.timer_generation,
            delay_ms = self.interval.as_millis() as u64,
            "Advance timer armed"
        );
    }

    fn publish(&self) {
        let mut view = CarouselView::new(self.state, self.items.clone(), self.revision);
        view.timer_armed = self.timer.is_some();
        view.timer_generation = self.timer_generation;
        self.view.send_replace(view);
    }
}

async fn wait_timer(timer: &mut Option<Pin<Box<Sleep>>>) {
    match timer {
        Some(sleep) => sleep.as_mut().await,
        None => pending().await,
    }
}
