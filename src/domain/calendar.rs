// Copyright (c) 2025 - Cowboy AI, Inc.
//! Date-derived display helpers

use chrono::{DateTime, Datelike, Utc};

use super::event::Event;

/// Calendar month names in the site's locale, January first
pub const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// Month label for a date
pub fn month_label(date: &DateTime<Utc>) -> &'static str {
    MONTHS[date.month0() as usize]
}

/// Order events most recent first
///
/// The sort is stable: events sharing a timestamp keep their feed order.
pub fn sort_by_date_desc(events: &[Event]) -> Vec<Event> {
    let mut sorted = events.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
