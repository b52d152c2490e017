//! Page cursor over a file list.

use std::ops::Range;

/// Number of entries shown on one page.
pub const PAGE_SIZE: usize = 5;

/// Zero-based start index of the current page.
///
/// The cursor does not hold the list; every query takes the current list
/// length so it stays correct after entries are removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    start: usize,
    page_size: usize,
}

impl PageCursor {
    /// Cursor at the first page with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    /// Cursor at the first page with a custom page size (minimum 1).
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            start: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Index range of the visible page for a list of `total` entries.
    ///
    /// A start past the end of the list is pulled back to the last
    /// non-empty page.
    pub fn visible_range(&self, total: usize) -> Range<usize> {
        let lo = self.clamped_start(total);
        let hi = (lo + self.page_size).min(total);
        lo..hi
    }

    /// Whether another page follows the current one.
    pub fn has_next(&self, total: usize) -> bool {
        self.start + self.page_size < total
    }

    /// Whether a page precedes the current one.
    pub fn has_previous(&self) -> bool {
        self.start >= self.page_size
    }

    /// Move to the next page. No-op on the last page.
    pub fn advance(&mut self, total: usize) {
        if self.has_next(total) {
            self.start += self.page_size;
        }
    }

    /// Move to the previous page. No-op on the first page.
    pub fn retreat(&mut self) {
        self.start = self.start.saturating_sub(self.page_size);
    }

    /// Back to the first page.
    pub fn reset(&mut self) {
        self.start = 0;
    }

    /// Pull the cursor back onto a valid page after the list shrank.
    pub fn clamp(&mut self, total: usize) {
        self.start = self.clamped_start(total);
    }

    /// One-based number of the current page.
    pub fn page_number(&self) -> usize {
        self.start / self.page_size + 1
    }

    /// Number of pages for `total` entries; an empty list still has one page.
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    fn clamped_start(&self, total: usize) -> usize {
        if self.start < total {
            self.start - self.start % self.page_size
        } else if total == 0 {
            0
        } else {
            (total - 1) / self.page_size * self.page_size
        }
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_page() {
        let cursor = PageCursor::new();
        assert_eq!(cursor.visible_range(4), 0..4);
        assert!(!cursor.has_next(4));
        assert!(!cursor.has_previous());
    }

    #[test]
    fn test_twelve_entries_paginate_5_5_2() {
        let mut cursor = PageCursor::new();
        let mut sizes = vec![cursor.visible_range(12).len()];
        while cursor.has_next(12) {
            cursor.advance(12);
            sizes.push(cursor.visible_range(12).len());
        }
        assert_eq!(sizes, vec![5, 5, 2]);
        assert_eq!(cursor.start(), 10);
        assert_eq!(cursor.visible_range(12), 10..12);
        assert!(!cursor.has_next(12));
        assert!(cursor.has_previous());
    }

    #[test]
    fn test_retreat_never_negative() {
        let mut cursor = PageCursor::new();
        for _ in 0..3 {
            cursor.retreat();
            assert_eq!(cursor.start(), 0);
        }
        cursor.advance(20);
        cursor.retreat();
        cursor.retreat();
        assert_eq!(cursor.start(), 0);
    }

    #[test]
    fn test_advance_stops_at_last_page() {
        let mut cursor = PageCursor::new();
        for _ in 0..10 {
            cursor.advance(7);
        }
        assert_eq!(cursor.start(), 5);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut cursor = PageCursor::new();
        cursor.advance(6);
        assert_eq!(cursor.start(), 5);

        // Last entry on the second page was removed.
        assert_eq!(cursor.visible_range(5), 0..5);
        cursor.clamp(5);
        assert_eq!(cursor.start(), 0);
        assert!(!cursor.has_previous());

        cursor.clamp(0);
        assert_eq!(cursor.visible_range(0), 0..0);
    }

    #[test]
    fn test_has_next_matches_page_end() {
        for total in 0..23 {
            let mut cursor = PageCursor::new();
            loop {
                let range = cursor.visible_range(total);
                assert!(range.len() <= PAGE_SIZE);
                assert!(range.end <= total);
                assert_eq!(cursor.has_next(total), range.end != total);
                if !cursor.has_next(total) {
                    break;
                }
                cursor.advance(total);
            }
        }
    }

    #[test]
    fn test_page_numbers() {
        let mut cursor = PageCursor::new();
        assert_eq!(cursor.page_count(0), 1);
        assert_eq!(cursor.page_count(10), 2);
        assert_eq!(cursor.page_count(11), 3);
        cursor.advance(11);
        assert_eq!(cursor.page_number(), 2);
    }

    #[test]
    fn test_zero_page_size_is_bumped() {
        let cursor = PageCursor::with_page_size(0);
        assert_eq!(cursor.page_size(), 1);
    }
}
