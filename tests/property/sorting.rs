// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the carousel ordering
//!
//! The carousel list is the focus subset sorted by date, most recent
//! first. Items sharing a timestamp must keep their feed order so the
//! pagination dots are deterministic.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use event_showcase::domain::{month_label, sort_by_date_desc, Event, MONTHS};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// Events with unique ids and dates drawn from a small pool, so ties are common
fn events_strategy() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(0i64..12, 0..40).prop_map(|offsets| {
        offsets
            .into_iter()
            .enumerate()
            .map(|(i, offset)| {
                let date = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                    + chrono::Duration::days(offset * 17);
                Event::new(i as i64, date, format!("event {}", i))
            })
            .collect()
    })
}

fn position(events: &[Event], event: &Event) -> usize {
    events
        .iter()
        .position(|e| e.id == event.id)
        .expect("sorted item comes from the input")
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Output is ordered by date, most recent first
    #[test]
    fn prop_sorted_descending(events in events_strategy()) {
        let sorted = sort_by_date_desc(&events);
        for pair in sorted.windows(2) {
            prop_assert!(pair[0].date >= pair[1].date);
        }
    }

    /// Sorting is a permutation of the input
    #[test]
    fn prop_sort_keeps_every_item(events in events_strategy()) {
        let sorted = sort_by_date_desc(&events);
        prop_assert_eq!(sorted.len(), events.len());
        for event in &events {
            prop_assert!(sorted.contains(event));
        }
    }

    /// Equal dates keep their original relative order
    #[test]
    fn prop_ties_keep_feed_order(events in events_strategy()) {
        let sorted = sort_by_date_desc(&events);
        for pair in sorted.windows(2) {
            if pair[0].date == pair[1].date {
                prop_assert!(position(&events, &pair[0]) < position(&events, &pair[1]));
            }
        }
    }

    /// Sorting twice is the same as sorting once
    #[test]
    fn prop_sort_idempotent(events in events_strategy()) {
        let once = sort_by_date_desc(&events);
        let twice = sort_by_date_desc(&once);
        prop_assert_eq!(once, twice);
    }

    /// An already descending list is left untouched
    #[test]
    fn prop_descending_input_is_noop(events in events_strategy()) {
        let mut descending = events.clone();
        descending.sort_by(|a, b| b.date.cmp(&a.date));
        prop_assert_eq!(sort_by_date_desc(&descending), descending);
    }

    /// Month label depends only on the calendar month
    #[test]
    fn prop_month_label_matches_month(seconds in 0i64..4_000_000_000) {
        let date: DateTime<Utc> = Utc.timestamp_opt(seconds, 0).unwrap();
        prop_assert_eq!(month_label(&date), MONTHS[date.month0() as usize]);
    }
}
