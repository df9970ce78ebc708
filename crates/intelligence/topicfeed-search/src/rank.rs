//! Per-dataset search and the merged ranking

use std::cmp::Reverse;
use topicfeed_core::{FeedItem, SearchResult, Topic};

use crate::score;

/// Topics whose name matches `query`, in dataset order
pub fn search_topics(query: &str, topics: &[Topic]) -> Vec<SearchResult> {
    topics
        .iter()
        .filter_map(|topic| {
            let s = score(query, &topic.name);
            (s > 0).then(|| SearchResult::topic(topic.clone(), s))
        })
        .collect()
}

/// Feed items whose title or author matches `query`; the better field wins
pub fn search_feed_items(query: &str, items: &[FeedItem]) -> Vec<SearchResult> {
    items
        .iter()
        .filter_map(|item| {
            let s = score(query, &item.title).max(score(query, &item.author));
            (s > 0).then(|| SearchResult::feed(item.clone(), s))
        })
        .collect()
}

/// Search both datasets and rank the hits, best first.
///
/// The sort is stable: equal scores keep topics ahead of feed items and
/// dataset order within each.
pub fn search(query: &str, topics: &[Topic], items: &[FeedItem]) -> Vec<SearchResult> {
    let mut results = search_topics(query, topics);
    results.extend(search_feed_items(query, items));
    results.sort_by_key(|r| Reverse(r.score));
    results
}
