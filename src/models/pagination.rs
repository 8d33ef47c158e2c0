//! Pagination state and paged query results

use serde::{Deserialize, Serialize};

/// Page sizes offered by the page-size selector
pub const ALLOWED_LIMITS: [u32; 8] = [10, 20, 50, 100, 500, 1000, 5000, 10000];

/// Rows per page, restricted to [`ALLOWED_LIMITS`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PageLimit(u32);

impl PageLimit {
    pub const DEFAULT: PageLimit = PageLimit(10);

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn allowed() -> impl Iterator<Item = PageLimit> {
        ALLOWED_LIMITS.into_iter().map(PageLimit)
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported page size: {0}")]
pub struct UnsupportedLimit(pub u32);

impl TryFrom<u32> for PageLimit {
    type Error = UnsupportedLimit;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if ALLOWED_LIMITS.contains(&value) {
            Ok(PageLimit(value))
        } else {
            Err(UnsupportedLimit(value))
        }
    }
}

impl From<PageLimit> for u32 {
    fn from(limit: PageLimit) -> Self {
        limit.0
    }
}

/// Current page (1-based) and page size of a list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub page: u32,
    pub limit: PageLimit,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PageLimit::DEFAULT,
        }
    }
}

impl PaginationState {
    pub fn new(page: u32, limit: PageLimit) -> Self {
        Self {
            page: page.max(1),
            limit,
        }
    }

    /// Parse a persisted `{"page": .., "limit": ..}` blob.
    ///
    /// Returns `None` for anything malformed, including page 0 and
    /// limits outside the selector.
    pub fn parse(raw: &str) -> Option<Self> {
        let state: PaginationState = serde_json::from_str(raw).ok()?;
        (state.page >= 1).then_some(state)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Index of the first row of the current page
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize).saturating_mul(self.limit.get() as usize)
    }

    /// Clamp the page into `[1, page_count]`, returning whether it moved
    pub fn clamp_to(&mut self, page_count: u32) -> bool {
        let clamped = self.page.clamp(1, page_count.max(1));
        let moved = clamped != self.page;
        self.page = clamped;
        moved
    }
}

/// Number of pages for `count` rows: `ceil(count / limit)`, never below 1
pub fn page_count(count: usize, limit: PageLimit) -> u32 {
    let pages = count.div_ceil(limit.get() as usize).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// One page of a filtered collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    /// Size of the filtered (not the full) collection
    pub count: usize,
    /// The page that was requested
    pub page: u32,
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            count: 0,
            page: 1,
        }
    }
}

impl<T: Clone> PageResult<T> {
    /// Slice an already-filtered sequence; out-of-range pages yield no items.
    pub fn slice<'a, I>(filtered: I, pagination: PaginationState) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let mut count = 0;
        let start = pagination.offset();
        let limit = pagination.limit.get() as usize;
        let mut items = Vec::new();

        for (index, item) in filtered.into_iter().enumerate() {
            count += 1;
            if index >= start && items.len() < limit {
                items.push(item.clone());
            }
        }

        Self {
            items,
            count,
            page: pagination.page,
        }
    }
}
