//! Read-only repository seam

use crate::{FeedItem, Result, Topic};

/// Source of the topic and feed datasets.
///
/// Implementations are read for the lifetime of the process and must be
/// safe to share between request handlers.
pub trait Catalog: Send + Sync {
    /// All topics, in display order
    fn list_topics(&self) -> Result<Vec<Topic>>;

    /// All feed items, in storage order
    fn list_feed_items(&self) -> Result<Vec<FeedItem>>;
}
