//! # topicfeed core
//!
//! Types shared by every tier of the workspace.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        TOPICFEED                             │
//! ├──────────────────────────────────────────────────────────────┤
//! │                                                              │
//! │   Catalog ──► search / paginate ──► HTTP JSON ──► front end  │
//! │      │                                  │                    │
//! │      ▼                                  ▼                    │
//! │  [Topics, FeedItems]               [EventLog]                │
//! │                                                              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - [`Catalog`] is the read-only repository seam. The built-in dataset and
//!   any future store sit behind it.
//! - [`EventLog`] is the logging seam handed to request handlers.

pub mod catalog;
pub mod log;
pub mod model;

pub use catalog::Catalog;
pub use log::{EventLog, LogEntry, LogLevel, MemoryLog, TracingLog};
pub use model::{FeedItem, FeedKind, FeedResponse, Pagination, SearchHit, SearchResult, Topic};

/// Result type for topicfeed operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading or reading catalog data
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Catalog unavailable: {0}")]
    Catalog(String),
}
