//! Fuzzy match scorer
//!
//! | Tier | Rule                                   | Score |
//! |------|----------------------------------------|-------|
//! | 1    | byte-exact                             | 100   |
//! | 2    | exact, ignoring case                   | 90    |
//! | 3    | text starts with query, ignoring case  | 80    |
//! | 4    | text contains query, ignoring case     | 60    |
//! | 5    | query is an ordered subsequence        | 20-40 |
//!
//! The first tier that matches wins. An empty query scores 0 everywhere.

pub const EXACT: u32 = 100;
pub const EXACT_IGNORE_CASE: u32 = 90;
pub const PREFIX: u32 = 80;
pub const SUBSTRING: u32 = 60;
pub const SUBSEQUENCE_FLOOR: u32 = 20;
pub const SUBSEQUENCE_SCALE: u32 = 40;

/// Score how well `query` matches `text`, from 0 (no match) to 100.
pub fn score(query: &str, text: &str) -> u32 {
    if query.is_empty() {
        return 0;
    }

    if text == query {
        return EXACT;
    }

    let query = query.to_lowercase();
    let text = text.to_lowercase();

    if text == query {
        EXACT_IGNORE_CASE
    } else if text.starts_with(&query) {
        PREFIX
    } else if text.contains(&query) {
        SUBSTRING
    } else {
        subsequence(&query, &text)
    }
}

/// Walk `text` once, advancing through `query` on every matching char.
/// Both sides are expected to be lowercased already.
fn subsequence(query: &str, text: &str) -> u32 {
    let needle: Vec<char> = query.chars().collect();
    let mut matched = 0;

    for c in text.chars() {
        if matched == needle.len() {
            break;
        }
        if c == needle[matched] {
            matched += 1;
        }
    }

    if matched < needle.len() {
        return 0;
    }

    let ratio = (matched as u32 * SUBSEQUENCE_SCALE) / needle.len() as u32;
    ratio.max(SUBSEQUENCE_FLOOR)
}
