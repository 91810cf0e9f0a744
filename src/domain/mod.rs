// Copyright (c) 2025 - Cowboy AI, Inc.
//! Feed Domain Model
//!
//! - [`Event`] - a promotable item keyed by [`EventId`]
//! - [`Feed`] - the decoded `{ events, focus }` payload
//! - [`month_label`] / [`sort_by_date_desc`] - pure, date-derived views

pub mod calendar;
pub mod event;
pub mod feed;

pub use calendar::{month_label, sort_by_date_desc, MONTHS};
pub use event::{parse_instant, Event, EventId};
pub use feed::Feed;
