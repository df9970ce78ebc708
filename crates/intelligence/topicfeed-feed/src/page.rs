//! Pagination

use topicfeed_core::{FeedItem, FeedResponse, Pagination};

use crate::sort::{sort_items, SortKey};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 6;

/// A validated feed request: `page >= 1`, `limit >= 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedQuery {
    pub page: usize,
    pub limit: usize,
    pub sort: SortKey,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
            sort: SortKey::default(),
        }
    }
}

impl FeedQuery {
    /// Clamp raw numbers: `page < 1` becomes 1, `limit <= 0` becomes the default
    pub fn new(page: i64, limit: i64, sort: SortKey) -> Self {
        let page = usize::try_from(page).ok().filter(|p| *p >= 1).unwrap_or(DEFAULT_PAGE);
        let limit = usize::try_from(limit).ok().filter(|l| *l >= 1).unwrap_or(DEFAULT_LIMIT);
        Self { page, limit, sort }
    }

    /// Build from raw query-string values.
    ///
    /// Numbers are read from their leading digits (`"3abc"` is 3); anything
    /// missing or unreadable takes the default.
    pub fn from_params(page: Option<&str>, limit: Option<&str>, sort: Option<&str>) -> Self {
        let page = page.and_then(leading_int).unwrap_or(DEFAULT_PAGE as i64);
        let limit = limit.and_then(leading_int).unwrap_or(DEFAULT_LIMIT as i64);
        Self::new(page, limit, SortKey::from_param(sort))
    }

    /// Sort a copy of `items` and cut out the requested page
    pub fn apply(&self, items: &[FeedItem]) -> FeedResponse {
        let mut sorted = items.to_vec();
        sort_items(&mut sorted, self.sort);

        let total = sorted.len();
        let start = (self.page - 1).saturating_mul(self.limit).min(total);
        let end = start.saturating_add(self.limit).min(total);

        FeedResponse {
            items: sorted[start..end].to_vec(),
            pagination: Pagination {
                page: self.page,
                limit: self.limit,
                total,
                total_pages: total.div_ceil(self.limit),
            },
        }
    }
}

/// Sort `items` by `sort` and return page `page` of size `limit`
pub fn paginate(items: &[FeedItem], page: i64, limit: i64, sort: SortKey) -> FeedResponse {
    FeedQuery::new(page, limit, sort).apply(items)
}

fn leading_int(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}
