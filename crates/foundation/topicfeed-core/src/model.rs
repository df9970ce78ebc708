//! Records served by the API
//!
//! Field names follow the JSON the front end already consumes, which mixes
//! camelCase (`imgSrc`) with snake_case (`created_at`).

use serde::{Deserialize, Serialize};

/// A browsable topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub href: String,
    #[serde(rename = "imgSrc")]
    pub img_src: String,
}

impl Topic {
    pub fn new(name: impl Into<String>, href: impl Into<String>, img_src: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
            img_src: img_src.into(),
        }
    }
}

/// Kind of feed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedKind {
    Article,
    Lesson,
}

/// A single entry in the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedItem {
    #[serde(rename = "type")]
    pub kind: FeedKind,

    pub title: String,

    pub author: String,

    #[serde(rename = "authorImg")]
    pub author_img: String,

    #[serde(rename = "imgSrc")]
    pub img_src: String,

    pub href: String,

    /// Rendered as the wide card at the top of the feed
    #[serde(rename = "isLarge", default, skip_serializing_if = "Option::is_none")]
    pub is_large: Option<bool>,

    /// ISO-8601 creation time, kept as text so unparseable values survive a round trip
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watch_count: Option<f64>,
}

/// The record a search hit points at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "item", rename_all = "lowercase")]
pub enum SearchHit {
    Topic(Topic),
    Feed(FeedItem),
}

/// A scored search hit, serialized as `{ "type", "item", "score" }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(flatten)]
    pub hit: SearchHit,
    pub score: u32,
}

impl SearchResult {
    pub fn topic(topic: Topic, score: u32) -> Self {
        Self {
            hit: SearchHit::Topic(topic),
            score,
        }
    }

    pub fn feed(item: FeedItem, score: u32) -> Self {
        Self {
            hit: SearchHit::Feed(item),
            score,
        }
    }

    pub fn is_topic(&self) -> bool {
        matches!(self.hit, SearchHit::Topic(_))
    }
}

/// Page bookkeeping returned alongside feed items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    #[serde(rename = "totalPages")]
    pub total_pages: usize,
}

/// One page of the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedResponse {
    pub items: Vec<FeedItem>,
    pub pagination: Pagination,
}
