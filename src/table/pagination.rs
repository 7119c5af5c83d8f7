//! Page index/size bookkeeping for a table whose rows are sliced by the
//! caller.
//!
//! Every operation is total: out-of-range indices are clamped and a zero
//! page size is raised to 1, so after any call
//! `page_index < max(1, page_count)` holds.

use std::fmt;
use std::ops::Range;

/// Rows per page a freshly mounted table starts with.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Choices offered by the "Rows per page" control.
pub const PAGE_SIZE_OPTIONS: [usize; 5] = [10, 20, 30, 40, 50];

/// Snapshot of the pagination state, handed to collaborators that only
/// display it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// `ceil(total_rows / page_size)`, with `page_size` floored at 1.
pub fn page_count(total_rows: usize, page_size: usize) -> usize {
    total_rows.div_ceil(page_size.max(1))
}

/// Pagination controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    state: PaginationState,
    total_rows: usize,
}

impl Paginator {
    pub fn new(page_size: usize, total_rows: usize) -> Self {
        Self {
            state: PaginationState {
                page_index: 0,
                page_size: page_size.max(1),
            },
            total_rows,
        }
    }

    pub fn state(&self) -> PaginationState {
        self.state
    }

    pub fn page_index(&self) -> usize {
        self.state.page_index
    }

    pub fn page_size(&self) -> usize {
        self.state.page_size
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    pub fn page_count(&self) -> usize {
        page_count(self.total_rows, self.state.page_size)
    }

    fn last_index(&self) -> usize {
        self.page_count().saturating_sub(1)
    }

    /// Jump to page `n` (0-based), clamped into range.
    pub fn set_page_index(&mut self, n: usize) {
        self.state.page_index = n.min(self.last_index());
    }

    pub fn next_page(&mut self) {
        if self.can_next_page() {
            self.state.page_index += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.can_previous_page() {
            self.state.page_index -= 1;
        }
    }

    pub fn first_page(&mut self) {
        self.set_page_index(0);
    }

    pub fn last_page(&mut self) {
        self.set_page_index(self.last_index());
    }

    /// Change rows per page. Zero is clamped to 1. The current index is kept
    /// when it is still valid, otherwise it moves to the last page.
    pub fn set_page_size(&mut self, n: usize) {
        self.state.page_size = n.max(1);
        self.clamp();
    }

    /// Advance to the next entry of `options` after the current size,
    /// wrapping to the first. Sizes not in the list jump to the first option.
    pub fn cycle_page_size(&mut self, options: &[usize]) {
        let Some(first) = options.first().copied() else {
            return;
        };
        let next = options
            .iter()
            .position(|size| *size == self.state.page_size)
            .and_then(|idx| options.get(idx + 1).copied())
            .unwrap_or(first);
        self.set_page_size(next);
    }

    /// Record a new dataset length and re-clamp the page index.
    pub fn set_total_rows(&mut self, total_rows: usize) {
        self.total_rows = total_rows;
        self.clamp();
    }

    /// Replace the whole state, as a controlled table would.
    pub fn set_state(&mut self, state: PaginationState) {
        self.state.page_size = state.page_size.max(1);
        self.set_page_index(state.page_index);
    }

    pub fn can_previous_page(&self) -> bool {
        self.state.page_index > 0
    }

    pub fn can_next_page(&self) -> bool {
        self.state.page_index + 1 < self.page_count()
    }

    /// Row range of the current page within the full collection.
    pub fn page_range(&self) -> Range<usize> {
        let start = self
            .state
            .page_index
            .saturating_mul(self.state.page_size)
            .min(self.total_rows);
        let end = start.saturating_add(self.state.page_size).min(self.total_rows);
        start..end
    }

    fn clamp(&mut self) {
        self.state.page_index = self.state.page_index.min(self.last_index());
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, 0)
    }
}

/// "Page 2 of 5". An empty dataset reads "Page 1 of 1".
impl fmt::Display for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Page {} of {}",
            self.state.page_index + 1,
            self.page_count().max(1)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 0), 25);
    }

    #[test]
    fn test_page_range_last_page_is_partial() {
        let mut pager = Paginator::new(10, 25);
        pager.last_page();
        assert_eq!(pager.page_range(), 20..25);
        assert_eq!(pager.to_string(), "Page 3 of 3");
    }

    #[test]
    fn test_empty_dataset() {
        let mut pager = Paginator::new(10, 0);
        pager.next_page();
        pager.last_page();
        assert_eq!(pager.page_index(), 0);
        assert_eq!(pager.page_range(), 0..0);
        assert!(!pager.can_next_page());
        assert!(!pager.can_previous_page());
        assert_eq!(pager.to_string(), "Page 1 of 1");
    }

    #[test]
    fn test_cycle_page_size() {
        let mut pager = Paginator::new(10, 100);
        pager.cycle_page_size(&PAGE_SIZE_OPTIONS);
        assert_eq!(pager.page_size(), 20);
        pager.set_page_size(50);
        pager.cycle_page_size(&PAGE_SIZE_OPTIONS);
        assert_eq!(pager.page_size(), 10);
        pager.set_page_size(7);
        pager.cycle_page_size(&PAGE_SIZE_OPTIONS);
        assert_eq!(pager.page_size(), 10);
        pager.cycle_page_size(&[]);
        assert_eq!(pager.page_size(), 10);
    }

    #[test]
    fn test_set_state_clamps() {
        let mut pager = Paginator::new(10, 30);
        pager.set_state(PaginationState {
            page_index: 9,
            page_size: 0,
        });
        assert_eq!(pager.page_size(), 1);
        assert_eq!(pager.page_index(), 9);
        pager.set_state(PaginationState {
            page_index: 9,
            page_size: 15,
        });
        assert_eq!(pager.page_index(), 1);
    }
}
