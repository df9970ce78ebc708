//! JSON-file dataset
//!
//! Expected layout:
//!
//! ```json
//! { "topics": [ { "name": "...", "href": "...", "imgSrc": "..." } ],
//!   "feed":   [ { "type": "article", "title": "...", ... } ] }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use topicfeed_core::{Catalog, FeedItem, Result, Topic};
use tracing::info;

use crate::StaticCatalog;

/// On-disk representation of a dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub topics: Vec<Topic>,
    #[serde(default)]
    pub feed: Vec<FeedItem>,
}

/// Catalog loaded once from a JSON file and held in memory afterwards
#[derive(Debug, Clone)]
pub struct JsonCatalog {
    inner: StaticCatalog,
}

impl JsonCatalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&raw)?;
        info!(
            path = %path.display(),
            topics = catalog.inner.topics().len(),
            feed_items = catalog.inner.feed_items().len(),
            "loaded catalog file"
        );
        Ok(catalog)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Ok(Self {
            inner: StaticCatalog::new(file.topics, file.feed),
        })
    }
}

impl Catalog for JsonCatalog {
    fn list_topics(&self) -> Result<Vec<Topic>> {
        self.inner.list_topics()
    }

    fn list_feed_items(&self) -> Result<Vec<FeedItem>> {
        self.inner.list_feed_items()
    }
}
