// Copyright (c) 2025 - Cowboy AI, Inc.
//! Read-only carousel surface for presentational components

use std::sync::Arc;

use crate::domain::{month_label, Event, EventId};
use crate::state_machine::CarouselState;

/// One slide of the carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub event: Event,
    pub month: &'static str,
    pub displayed: bool,
}

/// Selectable pagination marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationMarker {
    pub index: usize,
    pub id: EventId,
    pub selected: bool,
}

/// Snapshot of the carousel as seen by renderers
///
/// `items` is the focus list sorted most recent first; `state` always
/// indexes into it.
#[derive(Debug, Clone)]
pub struct CarouselView {
    pub(crate) state: CarouselState,
    pub(crate) items: Arc<[Event]>,
    pub(crate) feed_revision: u64,
    pub(crate) timer_armed: bool,
    pub(crate) timer_generation: u64,
}

impl Default for CarouselView {
    fn default() -> Self {
        Self::new(CarouselState::Empty, Arc::from(Vec::new()), 0)
    }
}

impl CarouselView {
    pub(crate) fn new(state: CarouselState, items: Arc<[Event]>, feed_revision: u64) -> Self {
        Self {
            state,
            items,
            feed_revision,
            timer_armed: false,
            timer_generation: 0,
        }
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn active_index(&self) -> Option<usize> {
        self.state.index()
    }

    pub fn active_event(&self) -> Option<&Event> {
        self.active_index().and_then(|i| self.items.get(i))
    }

    /// Month label of the displayed event
    pub fn active_month(&self) -> Option<&'static str> {
        self.active_event().map(|event| month_label(&event.date))
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Sorted focus events
    pub fn items(&self) -> &[Event] {
        &self.items
    }

    /// Feed revision the items were derived from
    pub fn feed_revision(&self) -> u64 {
        self.feed_revision
    }

    /// Whether an advance is pending
    pub fn timer_armed(&self) -> bool {
        self.timer_armed
    }

    /// Number of times the advance timer has been armed
    pub fn timer_generation(&self) -> u64 {
        self.timer_generation
    }

    pub fn slides(&self) -> Vec<Slide> {
        let active = self.active_index();
        self.items
            .iter()
            .enumerate()
            .map(|(index, event)| Slide {
                event: event.clone(),
                month: month_label(&event.date),
                displayed: active == Some(index),
            })
            .collect()
    }

    /// One marker per item; exactly one is selected unless empty
    pub fn pagination(&self) -> Vec<PaginationMarker> {
        let active = self.active_index();
        self.items
            .iter()
            .enumerate()
            .map(|(index, event)| PaginationMarker {
                index,
                id: event.id.clone(),
                selected: active == Some(index),
            })
            .collect()
    }
}
