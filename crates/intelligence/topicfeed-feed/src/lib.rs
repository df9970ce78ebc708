//! # topicfeed feed
//!
//! Orders the feed by a chosen key and cuts it into pages.

pub mod page;
pub mod sort;

pub use page::{paginate, FeedQuery, DEFAULT_LIMIT, DEFAULT_PAGE};
pub use sort::{sort_items, SortKey};
