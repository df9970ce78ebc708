//! Feed ordering

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::{Ordering, Reverse};
use std::fmt;
use std::str::FromStr;
use topicfeed_core::FeedItem;

/// Key the feed is ordered by; every key sorts descending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Newest first
    #[default]
    CreatedAt,
    /// Highest `popularity` first
    Popular,
    /// Highest `rating` first
    Rating,
    /// Highest `watch_count` first
    MostWatched,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::CreatedAt,
        SortKey::Popular,
        SortKey::Rating,
        SortKey::MostWatched,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::CreatedAt => "created_at",
            SortKey::Popular => "popular",
            SortKey::Rating => "rating",
            SortKey::MostWatched => "most_watched",
        }
    }

    /// Query-string parsing: anything unrecognised means the default order
    pub fn from_param(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown sort key: {s}"))
    }
}

/// Sort `items` in place by `key`. Stable, so equal keys keep their order.
///
/// Missing metrics count as 0. A missing or unparseable `created_at` sorts
/// after every dated item.
pub fn sort_items(items: &mut [FeedItem], key: SortKey) {
    match key {
        SortKey::CreatedAt => items.sort_by_cached_key(|item| Reverse(created_millis(item))),
        SortKey::Popular => items.sort_by(|a, b| descending(a.popularity, b.popularity)),
        SortKey::Rating => items.sort_by(|a, b| descending(a.rating, b.rating)),
        SortKey::MostWatched => items.sort_by(|a, b| descending(a.watch_count, b.watch_count)),
    }
}

fn descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    b.unwrap_or(0.0).total_cmp(&a.unwrap_or(0.0))
}

fn created_millis(item: &FeedItem) -> Option<i64> {
    item.created_at.as_deref().and_then(parse_timestamp)
}

/// Milliseconds since the epoch for an ISO-8601 timestamp.
///
/// Accepts full RFC 3339, a local date-time without offset and a bare date;
/// the last two are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.timestamp_millis());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(ts.and_utc().timestamp_millis());
    }
    if let Ok(ts) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(ts.and_utc().timestamp_millis());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|ts| ts.and_utc().timestamp_millis())
}
