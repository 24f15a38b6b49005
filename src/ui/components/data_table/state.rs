//! Pure pagination and placeholder rules for the data table.

use crate::constants::PAGER_WINDOW;

/// Pagination props handed to the table by its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            per_page: crate::constants::DEFAULT_ENTRIES_PER_PAGE,
        }
    }
}

impl Pagination {
    pub fn prev_enabled(&self) -> bool {
        self.current_page > 1
    }

    pub fn next_enabled(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Whether `page` is a real page other than the current one
    pub fn accepts(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages.max(1) && page != self.current_page
    }

    /// Running number of the row at `index` on this page (1-based)
    pub fn row_number(&self, index: usize) -> u64 {
        u64::from(self.current_page.max(1) - 1) * u64::from(self.per_page) + index as u64 + 1
    }

    /// `(first, last, total)` for the "Showing X to Y of Z entries" line
    pub fn entry_range(&self) -> (u64, u64, u64) {
        entry_range(self.current_page, self.per_page, self.total_items)
    }
}

/// Pager state derived from [`Pagination`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    pub pages: Vec<u32>,
    pub current: u32,
    pub total_pages: u32,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl Pager {
    /// `None` when there is a single page
    pub fn from_pagination(pagination: &Pagination) -> Option<Self> {
        if pagination.total_pages <= 1 {
            return None;
        }
        Some(Self {
            pages: pager_window(pagination.current_page, pagination.total_pages),
            current: pagination.current_page,
            total_pages: pagination.total_pages,
            prev_enabled: pagination.prev_enabled(),
            next_enabled: pagination.next_enabled(),
        })
    }
}

/// Page numbers to show as buttons.
///
/// At most [`PAGER_WINDOW`] consecutive pages starting two before `current` (never below 1)
/// and cut at `total`, so the window shrinks on the last pages.
///
/// ```
/// use stockroom::ui::components::data_table::pager_window;
/// assert_eq!(pager_window(5, 7), vec![3, 4, 5, 6, 7]);
/// assert_eq!(pager_window(7, 7), vec![5, 6, 7]);
/// assert_eq!(pager_window(1, 3), vec![1, 2, 3]);
/// ```
pub fn pager_window(current: u32, total: u32) -> Vec<u32> {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let half = PAGER_WINDOW / 2;
    let start = current.saturating_sub(half).max(1);
    let end = (start + PAGER_WINDOW - 1).min(total);
    (start..=end).collect()
}

/// `(first, last, total)` entry numbers shown on `page`; all zero when there are no items
pub fn entry_range(page: u32, per_page: u32, total_items: u64) -> (u64, u64, u64) {
    if total_items == 0 {
        return (0, 0, 0);
    }
    let per_page = u64::from(per_page.max(1));
    let first = u64::from(page.max(1) - 1) * per_page + 1;
    let last = (u64::from(page.max(1)) * per_page).min(total_items);
    (first.min(total_items), last, total_items)
}

/// Placeholder text for the body, `None` when rows are shown. Loading wins over empty.
pub fn placeholder<'a>(loading: bool, is_empty: bool, loading_text: &'a str, empty_text: &'a str) -> Option<&'a str> {
    if loading {
        Some(loading_text)
    } else if is_empty {
        Some(empty_text)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_matches_reference_case() {
        assert_eq!(pager_window(5, 7), vec![3, 4, 5, 6, 7]);
    }

    #[test]
    fn window_is_bounded_and_contains_current() {
        for total in 1..=20 {
            for current in 1..=total {
                let pages = pager_window(current, total);
                assert!(pages.len() <= PAGER_WINDOW as usize);
                assert_eq!(pages[0], current.saturating_sub(PAGER_WINDOW / 2).max(1));
                assert!(pages.contains(&current));
                assert!(pages.iter().all(|p| *p >= 1 && *p <= total));
                assert!(pages.windows(2).all(|w| w[1] == w[0] + 1));
            }
        }
    }

    #[test]
    fn window_at_edges() {
        assert_eq!(pager_window(1, 10), vec![1, 2, 3, 4, 5]);
        assert_eq!(pager_window(10, 10), vec![8, 9, 10]);
        assert_eq!(pager_window(9, 10), vec![7, 8, 9, 10]);
        assert_eq!(pager_window(7, 7), vec![5, 6, 7]);
        assert_eq!(pager_window(2, 2), vec![1, 2]);
    }

    #[test]
    fn single_page_has_no_pager() {
        let pagination = Pagination {
            total_pages: 1,
            ..Pagination::default()
        };
        assert_eq!(Pager::from_pagination(&pagination), None);
    }

    #[test]
    fn prev_and_next_disabled_at_ends() {
        let first = Pagination {
            current_page: 1,
            total_pages: 3,
            total_items: 25,
            per_page: 10,
        };
        assert!(!first.prev_enabled());
        assert!(first.next_enabled());
        assert!(!first.accepts(0));
        assert!(!first.accepts(1));

        let last = Pagination { current_page: 3, ..first };
        assert!(last.prev_enabled());
        assert!(!last.next_enabled());
        assert!(!last.accepts(4));
    }

    #[test]
    fn entry_range_clamps_to_total() {
        assert_eq!(entry_range(1, 10, 25), (1, 10, 25));
        assert_eq!(entry_range(3, 10, 25), (21, 25, 25));
        assert_eq!(entry_range(1, 10, 0), (0, 0, 0));
    }

    #[test]
    fn loading_wins_over_empty() {
        assert_eq!(placeholder(true, true, "Loading...", "No data"), Some("Loading..."));
        assert_eq!(placeholder(false, true, "Loading...", "No data"), Some("No data"));
        assert_eq!(placeholder(false, false, "Loading...", "No data"), None);
    }

    #[test]
    fn row_numbers_continue_across_pages() {
        let pagination = Pagination {
            current_page: 2,
            total_pages: 3,
            total_items: 30,
            per_page: 10,
        };
        assert_eq!(pagination.row_number(0), 11);
    }
}
