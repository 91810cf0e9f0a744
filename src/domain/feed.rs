// Copyright (c) 2025 - Cowboy AI, Inc.
//! Feed Payload
//!
//! The feed is the whole JSON document: `{ "events": [...], "focus": [...] }`.
//! It is immutable once decoded and shared behind an `Arc` by the store.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::event::{Event, EventId};
use crate::errors::FeedError;

/// The full fetched payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    /// All events, in stored order
    pub events: Vec<Event>,

    /// Events eligible for the carousel, unordered
    pub focus: Vec<Event>,
}

impl Feed {
    pub fn new(events: Vec<Event>, focus: Vec<Event>) -> Self {
        Self { events, focus }
    }

    /// Decode a feed from a JSON string
    pub fn from_json(json: &str) -> Result<Self, FeedError> {
        Self::from_slice(json.as_bytes())
    }

    /// Decode a feed from raw JSON bytes
    ///
    /// Missing `events` or `focus` lists, unparseable dates and duplicate
    /// ids within a list are all format errors.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, FeedError> {
        let feed: Feed = serde_json::from_slice(bytes)?;
        feed.validate()?;
        Ok(feed)
    }

    /// Check that ids are unique within each list
    pub fn validate(&self) -> Result<(), FeedError> {
        ensure_unique_ids("events", &self.events)?;
        ensure_unique_ids("focus", &self.focus)
    }

    /// The last event in stored order, not the most recent by date
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }
}

fn ensure_unique_ids(list: &str, events: &[Event]) -> Result<(), FeedError> {
    let mut seen: HashSet<&EventId> = HashSet::with_capacity(events.len());
    for event in events {
        if !seen.insert(&event.id) {
            return Err(FeedError::Format(format!(
                "duplicate id {} in {}",
                event.id, list
            )));
        }
    }
    Ok(())
}
