//! Reusable paged data table.
//!
//! One table serves every list in the application. It is configured with column
//! descriptors, optional row actions and optional row numbering, and it is fed rows,
//! pagination and the active sort by its owner. It performs no I/O: sorting, paging and
//! row actions come back out as [`Action`]s for the owner to act on.

mod state;
mod view;

pub use state::{entry_range, pager_window, placeholder, Pager, Pagination};

use crate::constants::{TABLE_LOADING, TABLE_NO_DATA};
use crate::icons::IconService;
use crate::paging::{next_per_page, SortState};
use crate::ui::core::{Action, Component, TableMsg};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, widgets::TableState, Frame};
use std::collections::HashSet;

/// How a column's values are displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColumnKind {
    #[default]
    Text,
    Number,
    Currency,
}

/// Column descriptor; order in the table follows order of declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            kind: ColumnKind::Text,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn kind(mut self, kind: ColumnKind) -> Self {
        self.kind = kind;
        self
    }
}

/// Raw cell value; formatting depends on the column kind
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Amount(f64),
    Empty,
}

/// A record the table can display
pub trait TableRow {
    /// Stable unique identifier
    fn row_id(&self) -> String;

    fn cell(&self, key: &str) -> CellValue;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("duplicate column key '{0}'")]
    DuplicateColumn(String),

    #[error("a table needs at least one column")]
    NoColumns,
}

type RowCallback<R, T> = Box<dyn Fn(&R) -> T>;

/// Per-row action such as Edit or Delete
pub struct RowAction<R> {
    pub label: String,
    pub key: char,
    on_select: RowCallback<R, Action>,
    condition: Option<RowCallback<R, bool>>,
}

impl<R> RowAction<R> {
    pub fn new(label: impl Into<String>, key: char, on_select: impl Fn(&R) -> Action + 'static) -> Self {
        Self {
            label: label.into(),
            key,
            on_select: Box::new(on_select),
            condition: None,
        }
    }

    /// Show the action only for rows where `condition` holds
    pub fn when(mut self, condition: impl Fn(&R) -> bool + 'static) -> Self {
        self.condition = Some(Box::new(condition));
        self
    }

    pub fn is_visible(&self, row: &R) -> bool {
        self.condition.as_ref().map_or(true, |condition| condition(row))
    }

    /// Delete-like actions get destructive styling
    pub fn is_destructive(&self) -> bool {
        let label = self.label.to_lowercase();
        ["delete", "remove", "hapus"].iter().any(|word| label.contains(word))
    }

    pub fn select(&self, row: &R) -> Action {
        (self.on_select)(row)
    }
}

/// Body of the table as the view model sees it
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// A single row spanning all columns
    Placeholder(String),
    Rows(Vec<Vec<String>>),
}

pub struct DataTable<R> {
    columns: Vec<Column>,
    actions: Vec<RowAction<R>>,
    rows: Vec<R>,
    loading: bool,
    pagination: Pagination,
    paged: bool,
    sort: SortState,
    show_row_numbers: bool,
    empty_text: String,
    loading_text: String,
    icons: IconService,
    table_state: TableState,
}

impl<R: TableRow> DataTable<R> {
    /// Create a table; duplicate column keys are rejected
    pub fn new(columns: Vec<Column>) -> Result<Self, TableError> {
        if columns.is_empty() {
            return Err(TableError::NoColumns);
        }
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.key.as_str()) {
                return Err(TableError::DuplicateColumn(column.key.clone()));
            }
        }

        Ok(Self {
            columns,
            actions: Vec::new(),
            rows: Vec::new(),
            loading: false,
            pagination: Pagination::default(),
            paged: true,
            sort: SortState::default(),
            show_row_numbers: false,
            empty_text: TABLE_NO_DATA.to_string(),
            loading_text: TABLE_LOADING.to_string(),
            icons: IconService::default(),
            table_state: TableState::default(),
        })
    }

    pub fn with_actions(mut self, actions: Vec<RowAction<R>>) -> Self {
        self.actions = actions;
        self
    }

    pub fn with_row_numbers(mut self, show: bool) -> Self {
        self.show_row_numbers = show;
        self
    }

    /// Disable the entries line, pager and page keys
    pub fn without_pagination(mut self) -> Self {
        self.paged = false;
        self
    }

    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    pub fn with_icons(mut self, icons: IconService) -> Self {
        self.icons = icons;
        self
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn sort(&self) -> &SortState {
        &self.sort
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replace the displayed rows; the cursor is kept in range
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        let selected = match (self.table_state.selected(), self.rows.len()) {
            (_, 0) => None,
            (Some(index), len) => Some(index.min(len - 1)),
            (None, _) => Some(0),
        };
        self.table_state.select(selected);
    }

    pub fn set_pagination(&mut self, pagination: Pagination) {
        self.pagination = Pagination {
            current_page: pagination.current_page.max(1),
            total_pages: pagination.total_pages.max(1),
            ..pagination
        };
    }

    pub fn set_sort(&mut self, sort: SortState) {
        self.sort = sort;
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.table_state.selected().filter(|index| *index < self.rows.len())
    }

    pub fn selected_row(&self) -> Option<&R> {
        self.selected_index().and_then(|index| self.rows.get(index))
    }

    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let next = self.selected_index().map_or(0, |i| (i + 1).min(self.rows.len() - 1));
        self.table_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let previous = self.selected_index().map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(previous));
    }

    /// Header labels, including the row number and action columns when present
    pub fn header(&self) -> Vec<String> {
        let mut header = Vec::with_capacity(self.columns.len() + 2);
        if self.show_row_numbers {
            header.push("No".to_string());
        }
        for column in &self.columns {
            let indicator = match self.sort.direction_for(&column.key) {
                Some(crate::paging::SortDirection::Ascending) => format!(" {}", self.icons.sort_ascending()),
                Some(crate::paging::SortDirection::Descending) => format!(" {}", self.icons.sort_descending()),
                None => String::new(),
            };
            header.push(format!("{}{}", column.label, indicator));
        }
        if !self.actions.is_empty() {
            header.push("Actions".to_string());
        }
        header
    }

    pub fn column_count(&self) -> usize {
        self.header().len()
    }

    /// Placeholder or formatted rows
    pub fn body(&self) -> TableBody {
        if let Some(text) = placeholder(
            self.loading,
            self.rows.is_empty(),
            &self.loading_text,
            &self.empty_text,
        ) {
            return TableBody::Placeholder(text.to_string());
        }

        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let mut cells = Vec::with_capacity(self.column_count());
                if self.show_row_numbers {
                    cells.push(self.pagination.row_number(index).to_string());
                }
                for column in &self.columns {
                    cells.push(view::format_cell(&row.cell(&column.key), column.kind));
                }
                if !self.actions.is_empty() {
                    cells.push(
                        self.visible_actions(row)
                            .iter()
                            .map(|action| format!("[{}] {}", action.key, action.label))
                            .collect::<Vec<_>>()
                            .join("  "),
                    );
                }
                cells
            })
            .collect();
        TableBody::Rows(rows)
    }

    /// Pager for the current props, `None` when hidden
    pub fn pager(&self) -> Option<Pager> {
        if !self.paged {
            return None;
        }
        Pager::from_pagination(&self.pagination)
    }

    pub fn visible_actions(&self, row: &R) -> Vec<&RowAction<R>> {
        self.actions.iter().filter(|action| action.is_visible(row)).collect()
    }

    /// Sort request for the column at `index`; non-sortable columns do nothing
    pub fn request_sort(&self, index: usize) -> Action {
        match self.columns.get(index) {
            Some(column) if column.sortable => {
                let mut next = self.sort.clone();
                let direction = next.toggle(&column.key);
                Action::Table(TableMsg::Sort {
                    field: column.key.clone(),
                    direction,
                })
            }
            _ => Action::Handled,
        }
    }

    /// Page request; out of range pages and the current page do nothing
    pub fn request_page(&self, page: u32) -> Action {
        if self.paged && self.pagination.accepts(page) {
            Action::Table(TableMsg::Page(page))
        } else {
            Action::Handled
        }
    }

    pub fn request_previous_page(&self) -> Action {
        self.request_page(self.pagination.current_page.saturating_sub(1))
    }

    pub fn request_next_page(&self) -> Action {
        self.request_page(self.pagination.current_page + 1)
    }

    pub fn request_next_per_page(&self) -> Action {
        if self.paged {
            Action::Table(TableMsg::PerPage(next_per_page(self.pagination.per_page)))
        } else {
            Action::Handled
        }
    }

    /// Run the visible action bound to `key` on the selected row
    pub fn trigger_action(&self, key: char) -> Action {
        let Some(row) = self.selected_row() else {
            return Action::None;
        };
        self.visible_actions(row)
            .into_iter()
            .find(|action| action.key == key)
            .map_or(Action::None, |action| action.select(row))
    }

    /// Run the first visible action on the selected row
    pub fn trigger_default_action(&self) -> Action {
        let Some(row) = self.selected_row() else {
            return Action::None;
        };
        self.visible_actions(row)
            .first()
            .map_or(Action::None, |action| action.select(row))
    }
}

impl<R: TableRow> Component for DataTable<R> {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Action::None;
        }

        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Action::Handled
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                Action::Handled
            }
            KeyCode::Left | KeyCode::Char('h') if self.paged => self.request_previous_page(),
            KeyCode::Right | KeyCode::Char('l') if self.paged => self.request_next_page(),
            KeyCode::Home if self.paged => self.request_page(1),
            KeyCode::End if self.paged => self.request_page(self.pagination.total_pages),
            KeyCode::Char('n') if self.paged => self.request_next_per_page(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.request_sort(index)
            }
            KeyCode::Enter => self.trigger_default_action(),
            KeyCode::Char(c) if self.actions.iter().any(|action| action.key == c) => self.trigger_action(c),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        view::render(self, f, rect);
    }
}
