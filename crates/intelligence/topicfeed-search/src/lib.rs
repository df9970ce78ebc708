//! # topicfeed search
//!
//! Linear fuzzy search over the topic and feed datasets.
//!
//! ```text
//!   query ──► score(name)              ──► topic hits ─┐
//!         └─► max(score(title), score(author)) ──► feed hits ─┴─► merge ──► sort by score desc
//! ```
//!
//! Scores come from a fixed tier ladder, see [`score`].

pub mod rank;
pub mod score;

pub use rank::{search, search_feed_items, search_topics};
pub use score::score;
