//! List query and page result types shared by the API client and the table view.
//!
//! A list query is `(page, per_page, search, sort)`; the server answers with one
//! [`PageResult`]. The sort toggle rule lives on [`SortState`] so the table and the
//! request builder agree on it.

use crate::constants::{DEFAULT_ENTRIES_PER_PAGE, ENTRIES_PER_PAGE_OPTIONS};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sort direction sent to the server as `asc` / `desc`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active sort column and direction. Defaults to no column, descending.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    /// Apply a sort request on `field` and return the resulting direction.
    ///
    /// Requesting the active field flips the direction; any other field starts ascending.
    pub fn toggle(&mut self, field: &str) -> SortDirection {
        let direction = if self.field.as_deref() == Some(field) {
            self.direction.flipped()
        } else {
            SortDirection::Ascending
        };
        self.field = Some(field.to_string());
        self.direction = direction;
        direction
    }

    /// Direction shown for `field`, or `None` when it is not the active column
    pub fn direction_for(&self, field: &str) -> Option<SortDirection> {
        match self.field.as_deref() {
            Some(active) if active == field => Some(self.direction),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.field.is_some()
    }
}

/// Parameters of one list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u32,
    pub per_page: u32,
    pub search: String,
    pub sort: SortState,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_ENTRIES_PER_PAGE,
            search: String::new(),
            sort: SortState::default(),
        }
    }
}

impl ListQuery {
    pub fn with_per_page(per_page: u32) -> Self {
        Self {
            per_page: normalize_per_page(per_page),
            ..Self::default()
        }
    }

    /// Trimmed search term, `None` when blank
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search.trim();
        if term.is_empty() {
            None
        } else {
            Some(term)
        }
    }
}

/// Snap an arbitrary page size onto the fixed selector options
pub fn normalize_per_page(per_page: u32) -> u32 {
    if ENTRIES_PER_PAGE_OPTIONS.contains(&per_page) {
        per_page
    } else {
        DEFAULT_ENTRIES_PER_PAGE
    }
}

/// Next page size in selector order, wrapping around
pub fn next_per_page(per_page: u32) -> u32 {
    let index = ENTRIES_PER_PAGE_OPTIONS
        .iter()
        .position(|option| *option == per_page)
        .map(|i| (i + 1) % ENTRIES_PER_PAGE_OPTIONS.len())
        .unwrap_or(0);
    ENTRIES_PER_PAGE_OPTIONS[index]
}

/// One page of a list response
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_items: u64,
    /// Always at least 1, even for an empty result
    pub total_pages: u32,
    pub current_page: u32,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total_items: u64, total_pages: u32, current_page: u32) -> Self {
        Self {
            items,
            total_items,
            total_pages: total_pages.max(1),
            current_page: current_page.max(1),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0, 1, 1)
    }
}
