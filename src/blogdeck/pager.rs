//! Visible window arithmetic.
//!
//! The visible slice is always a prefix of the filtered list: `page_size * page_count`
//! elements, capped at the list length. All arithmetic saturates, so out-of-range inputs
//! degrade to a truncated or empty result.

use std::num::NonZeroUsize;

pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Page size and how many pages are currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerState {
    page_size: NonZeroUsize,
    page_count: NonZeroUsize,
}

impl PagerState {
    /// A pager on its first page. A zero page size is bumped to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: NonZeroUsize::new(page_size).unwrap_or(NonZeroUsize::MIN),
            page_count: NonZeroUsize::MIN,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    pub fn page_count(&self) -> usize {
        self.page_count.get()
    }

    /// One more page. The only way the page count grows.
    pub fn advance(self) -> Self {
        Self {
            page_count: self.page_count.saturating_add(1),
            ..self
        }
    }

    pub fn reset(self) -> Self {
        Self {
            page_count: NonZeroUsize::MIN,
            ..self
        }
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        visible_slice(items, self.page_size(), self.page_count())
    }

    pub fn current_page<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        page_window(items, self.page_size(), self.page_count())
    }

    pub fn has_more(&self, len: usize) -> bool {
        has_more(len, self.page_size(), self.page_count())
    }
}

impl Default for PagerState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Elements `0 .. page_size * page_count`, capped at the list length.
pub fn visible_slice<T>(items: &[T], page_size: usize, page_count: usize) -> &[T] {
    let end = page_size.saturating_mul(page_count).min(items.len());
    &items[..end]
}

/// Only the elements of page `page_count` (1-based): what a "load more" appends.
pub fn page_window<T>(items: &[T], page_size: usize, page_count: usize) -> &[T] {
    let start = page_size
        .saturating_mul(page_count.saturating_sub(1))
        .min(items.len());
    let end = page_size.saturating_mul(page_count).min(items.len());
    &items[start..end]
}

/// True iff `page_size * page_count < len`.
pub fn has_more(len: usize, page_size: usize, page_count: usize) -> bool {
    page_size.saturating_mul(page_count) < len
}
