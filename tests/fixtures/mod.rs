// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for event-showcase
//!
//! Deterministic feeds and sources shared by the integration suites. All
//! dates are fixed constants so ordering assertions are reproducible.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use event_showcase::carousel::CarouselView;
use event_showcase::domain::{Event, Feed};
use event_showcase::errors::FeedError;
use event_showcase::source::FeedSource;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::watch;

/// Feed document with both lists populated
pub const FEED_JSON: &str = r##"{
    "events": [
        {"id": 1, "type": "conférence", "date": "2022-04-29T20:28:45.744Z", "title": "User&product MixUsers", "description": "Présentation des nouveaux usages UX.", "cover": "/images/stem-list.png"},
        {"id": 2, "type": "expérience digitale", "date": "2022-01-29T20:28:45.744Z", "title": "#DigitonPARIS", "description": "Présentation des outils analytics.", "cover": "/images/charlesdeluvio.png"}
    ],
    "focus": [
        {"id": 10, "date": "2022-01-29T20:28:45.744Z", "title": "World economic forum", "description": "Oeuvre à la coopération.", "cover": "/images/evangeline-shaw.png"},
        {"id": 11, "date": "2022-04-29T20:28:45.744Z", "title": "Nordic design week", "description": "Conférences sur le design.", "cover": "/images/teemu-paananen.png"},
        {"id": 12, "date": "2022-02-28T20:28:45.744Z", "title": "Sneakercraze market", "description": "Rencontres de spécialistes.", "cover": "/images/jakob-dalbjorn.png"}
    ]
}"##;

pub fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// `focus = [{id:1, 2024-01-01}, {id:2, 2024-03-01}]`
pub fn two_focus_feed() -> Feed {
    Feed::new(
        vec![Event::new(1, day(2024, 1, 1), "january")],
        vec![
            Event::new(1, day(2024, 1, 1), "january"),
            Event::new(2, day(2024, 3, 1), "march"),
        ],
    )
}

/// Focus list of `len` events, one month apart, oldest first
pub fn focus_feed(len: usize) -> Feed {
    let focus = (0..len)
        .map(|i| {
            let date = day(2023, 1, 1) + chrono::Duration::days(30 * i as i64);
            Event::new(i as i64, date, format!("event {}", i))
        })
        .collect();
    Feed::new(vec![], focus)
}

/// Feed with an empty events list
pub fn empty_events_feed() -> Feed {
    Feed::new(vec![], vec![Event::new(1, day(2024, 1, 1), "only")])
}

/// Ids of the view's items, in display order
pub fn ids(view: &CarouselView) -> Vec<String> {
    view.items().iter().map(|e| e.id.to_string()).collect()
}

pub fn active_id(view: &CarouselView) -> Option<String> {
    view.active_event().map(|e| e.id.to_string())
}

/// Wait for a view matching `predicate`, failing after a minute of (virtual) time
pub async fn wait_for_view<F>(views: &mut watch::Receiver<CarouselView>, predicate: F) -> CarouselView
where
    F: FnMut(&CarouselView) -> bool,
{
    tokio::time::timeout(Duration::from_secs(60), views.wait_for(predicate))
        .await
        .expect("view condition not reached in time")
        .expect("carousel stopped")
        .clone()
}

/// Assert a virtual-time duration up to timer granularity
pub fn assert_near(actual: Duration, expected: Duration) {
    let tolerance = Duration::from_millis(5);
    assert!(
        actual >= expected && actual <= expected + tolerance,
        "expected ~{:?}, got {:?}",
        expected,
        actual
    );
}

/// Source that answers each fetch with the next feed in line
pub struct SequenceSource {
    feeds: Mutex<VecDeque<Result<Feed, String>>>,
    fetches: AtomicUsize,
}

impl SequenceSource {
    pub fn new(feeds: Vec<Result<Feed, String>>) -> Self {
        Self {
            feeds: Mutex::new(feeds.into()),
            fetches: AtomicUsize::new(0),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FeedSource for SequenceSource {
    async fn fetch(&self) -> Result<Feed, FeedError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match self.feeds.lock().unwrap().pop_front() {
            Some(Ok(feed)) => Ok(feed),
            Some(Err(reason)) => Err(FeedError::Transport(reason)),
            None => Err(FeedError::Transport("sequence exhausted".to_string())),
        }
    }

    fn describe(&self) -> String {
        "sequence".to_string()
    }
}

/// Source that panics while fetching
pub struct PanickingSource;

#[async_trait]
impl FeedSource for PanickingSource {
    async fn fetch(&self) -> Result<Feed, FeedError> {
        panic!("source exploded");
    }

    fn describe(&self) -> String {
        "panicking".to_string()
    }
}
