//! In-memory catalog and the built-in demo dataset

use topicfeed_core::{Catalog, FeedItem, FeedKind, Result, Topic};

use crate::grey_placeholder;

/// Catalog backed by vectors fixed at construction
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    topics: Vec<Topic>,
    feed: Vec<FeedItem>,
}

impl StaticCatalog {
    pub fn new(topics: Vec<Topic>, feed: Vec<FeedItem>) -> Self {
        Self { topics, feed }
    }

    /// The dataset shown on the demo page
    pub fn demo() -> Self {
        Self::new(demo_topics(), demo_feed())
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn feed_items(&self) -> &[FeedItem] {
        &self.feed
    }
}

impl Catalog for StaticCatalog {
    fn list_topics(&self) -> Result<Vec<Topic>> {
        Ok(self.topics.clone())
    }

    fn list_feed_items(&self) -> Result<Vec<FeedItem>> {
        Ok(self.feed.clone())
    }
}

fn topic(name: &str, label: &str) -> Topic {
    Topic::new(name, "#", grey_placeholder(40, 40, label))
}

pub fn demo_topics() -> Vec<Topic> {
    vec![
        topic("React", "R"),
        topic("Next.js", "N"),
        topic("TypeScript", "TS"),
        topic("JavaScript", "JS"),
        topic("Remix", "Rx"),
        topic("Redux", "Rd"),
        topic("Supabase", "S"),
        topic("Angular", "A"),
    ]
}

struct Entry {
    kind: FeedKind,
    title: &'static str,
    author: &'static str,
    initials: &'static str,
    label: &'static str,
    created_at: &'static str,
    popularity: f64,
    rating: f64,
    watch_count: f64,
}

impl Entry {
    fn into_item(self, is_large: bool) -> FeedItem {
        let size = if is_large { 150 } else { 85 };
        FeedItem {
            kind: self.kind,
            title: self.title.to_string(),
            author: self.author.to_string(),
            author_img: grey_placeholder(32, 32, self.initials),
            img_src: grey_placeholder(size, size, self.label),
            href: "#".to_string(),
            is_large: is_large.then_some(true),
            created_at: Some(self.created_at.to_string()),
            popularity: Some(self.popularity),
            rating: Some(self.rating),
            watch_count: Some(self.watch_count),
        }
    }
}

pub fn demo_feed() -> Vec<FeedItem> {
    let entries = [
        Entry {
            kind: FeedKind::Article,
            title: "AI Dev Essentials #7: Microsoft's AI Blitz, Google's NotebookLM Shines & New Coding Agents",
            author: "John Lindquist",
            initials: "JL",
            label: "AI",
            created_at: "2025-05-28T10:00:00Z",
            popularity: 95.0,
            rating: 4.8,
            watch_count: 1250.0,
        },
        Entry {
            kind: FeedKind::Lesson,
            title: "Local AI Code Reviews with the CodeRabbit Extension in Cursor",
            author: "John Lindquist",
            initials: "JL",
            label: "CR",
            created_at: "2025-05-27T14:30:00Z",
            popularity: 87.0,
            rating: 4.6,
            watch_count: 980.0,
        },
        Entry {
            kind: FeedKind::Lesson,
            title: "Create a Simple GitHub Issue Search MCP Server using Cursor",
            author: "Ákos Kőműves",
            initials: "AK",
            label: "GH",
            created_at: "2025-05-26T09:15:00Z",
            popularity: 78.0,
            rating: 4.5,
            watch_count: 756.0,
        },
        Entry {
            kind: FeedKind::Article,
            title: "AI Dev Essentials #6: Cursor 0.50, Zed, Cloudflare & AI Workflows",
            author: "John Lindquist",
            initials: "JL",
            label: "AI6",
            created_at: "2025-05-25T16:45:00Z",
            popularity: 92.0,
            rating: 4.7,
            watch_count: 1100.0,
        },
        Entry {
            kind: FeedKind::Lesson,
            title: "Automatically Improve Cursor Rules Using Custom Prompts",
            author: "John Lindquist",
            initials: "JL",
            label: "CR",
            created_at: "2025-05-24T11:20:00Z",
            popularity: 83.0,
            rating: 4.4,
            watch_count: 890.0,
        },
        Entry {
            kind: FeedKind::Lesson,
            title: "Clean up Legacy Functions for Testability in Cursor (0.50+) with cmd+k",
            author: "John Lindquist",
            initials: "JL",
            label: "CMD",
            created_at: "2025-05-23T13:10:00Z",
            popularity: 75.0,
            rating: 4.3,
            watch_count: 654.0,
        },
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| entry.into_item(i == 0))
        .collect()
}
