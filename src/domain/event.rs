// Copyright (c) 2025 - Cowboy AI, Inc.
//! Promotable Event Value Object
//!
//! An [`Event`] is one item of the feed. Its `id` is the only key used to
//! tell items apart between renders; its `date` drives both ordering and
//! the month label shown on a slide.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque event identifier
///
/// Feeds in the wild carry either numeric or string ids, so both are
/// accepted and compared as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventId::Number(n) => write!(f, "{}", n),
            EventId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for EventId {
    fn from(value: i64) -> Self {
        EventId::Number(value)
    }
}

impl From<i32> for EventId {
    fn from(value: i32) -> Self {
        EventId::Number(value.into())
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        EventId::Text(value.to_string())
    }
}

/// A single promotable item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,

    #[serde(deserialize_with = "deserialize_instant")]
    pub date: DateTime<Utc>,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Image resource reference
    #[serde(default)]
    pub cover: String,

    /// Event category, when the feed provides one
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl Event {
    /// Create an event with empty display text
    pub fn new(id: impl Into<EventId>, date: DateTime<Utc>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date,
            title: title.into(),
            description: String::new(),
            cover: String::new(),
            kind: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = cover.into();
        self
    }
}

/// Parse an ISO-8601 instant
///
/// Accepts full RFC 3339 timestamps, naive date-times (taken as UTC) and
/// bare dates (midnight UTC).
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn deserialize_instant<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_instant(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid event date: {:?}", raw)))
}
