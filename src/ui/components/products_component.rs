//! Product list screen: search bar plus the paged product table.
//!
//! The screen owns the [`ListQuery`]. Table messages and searches change the query and
//! issue a new [`Action::LoadProducts`] carrying a fresh request id; responses whose id is
//! not the latest are dropped so the table always reflects the last request made.

use crate::api::Product;
use crate::config::UiConfig;
use crate::constants::TABLE_NO_PRODUCTS;
use crate::icons::IconService;
use crate::paging::{ListQuery, PageResult, SortState};
use crate::ui::components::data_table::{
    CellValue, Column, ColumnKind, DataTable, Pagination, RowAction, TableError, TableRow,
};
use crate::ui::components::search_bar::SearchBar;
use crate::ui::core::{Action, Component, DialogType, Screen, TableMsg, ToastKind};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

impl TableRow for Product {
    fn row_id(&self) -> String {
        self.id.to_string()
    }

    fn cell(&self, key: &str) -> CellValue {
        match key {
            "name" => CellValue::Text(self.name.clone()),
            "sku" => CellValue::Text(self.sku.clone()),
            "quantity" => CellValue::Integer(self.quantity),
            "price" => CellValue::Amount(self.price),
            "created_at" => self.created_at.clone().map_or(CellValue::Empty, CellValue::Text),
            _ => CellValue::Empty,
        }
    }
}

/// Name, SKU, stock and price, all sortable
pub fn product_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("sku", "SKU").sortable(),
        Column::new("quantity", "Stock").sortable().kind(ColumnKind::Number),
        Column::new("price", "Price").sortable().kind(ColumnKind::Currency),
    ]
}

fn product_actions() -> Vec<RowAction<Product>> {
    vec![
        RowAction::new("Edit", 'e', |product: &Product| {
            Action::Navigate(Screen::ProductEdit(product.id))
        }),
        RowAction::new("Delete", 'd', |product: &Product| {
            Action::ShowDialog(DialogType::DeleteConfirmation {
                product_id: product.id,
                name: product.name.clone(),
            })
        }),
    ]
}

pub struct ProductsComponent {
    table: DataTable<Product>,
    search: SearchBar,
    query: ListQuery,
    latest_request: u64,
}

impl ProductsComponent {
    pub fn new(ui: &UiConfig, icons: IconService) -> Result<Self, TableError> {
        let table = DataTable::new(product_columns())?
            .with_actions(product_actions())
            .with_row_numbers(ui.show_row_numbers)
            .with_empty_text(TABLE_NO_PRODUCTS)
            .with_icons(icons);

        Ok(Self {
            table,
            search: SearchBar::new("Search by name or SKU..."),
            query: ListQuery::with_per_page(ui.entries_per_page),
            latest_request: 0,
        })
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn table(&self) -> &DataTable<Product> {
        &self.table
    }

    pub fn latest_request(&self) -> u64 {
        self.latest_request
    }

    /// Request the current query under a new request id
    pub fn load(&mut self) -> Action {
        self.latest_request += 1;
        self.table.set_loading(true);
        self.table.set_sort(self.query.sort.clone());
        // `n` cycles from the table's per_page, so keep it in step with the query
        let mut pagination = self.table.pagination();
        pagination.per_page = self.query.per_page;
        self.table.set_pagination(pagination);
        Action::LoadProducts {
            request_id: self.latest_request,
            query: self.query.clone(),
        }
    }

    /// Screen shown again; the previous query is kept
    pub fn enter(&mut self) -> Action {
        self.load()
    }

    fn apply_table_msg(&mut self, msg: TableMsg) -> Action {
        match msg {
            TableMsg::Sort { field, direction } => {
                self.query.sort = SortState {
                    field: Some(field),
                    direction,
                };
                self.query.page = 1;
            }
            TableMsg::Page(page) => self.query.page = page.max(1),
            TableMsg::PerPage(per_page) => {
                self.query.per_page = per_page;
                self.query.page = 1;
            }
        }
        self.load()
    }

    fn apply_search(&mut self, term: String) -> Action {
        self.query.search = term;
        self.query.page = 1;
        self.load()
    }

    /// Show a response; a page past the end is clamped and fetched again
    pub fn apply_page(&mut self, request_id: u64, page: PageResult<Product>) -> Action {
        if request_id != self.latest_request {
            log::debug!("Dropping stale product page for request {}", request_id);
            return Action::None;
        }

        if self.query.page > page.total_pages {
            self.query.page = page.total_pages;
            return self.load();
        }

        self.table.set_pagination(Pagination {
            current_page: self.query.page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            per_page: self.query.per_page,
        });
        self.table.set_rows(page.items);
        self.table.set_loading(false);
        Action::None
    }

    pub fn apply_error(&mut self, request_id: u64, message: String) -> Action {
        if request_id != self.latest_request {
            return Action::None;
        }
        self.table.set_loading(false);
        self.table.set_rows(Vec::new());
        Action::ShowToast(ToastKind::Error, message)
    }
}

impl Component for ProductsComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.search.is_focused() {
            return self.search.handle_key_events(key);
        }
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return Action::None;
        }

        match key.code {
            KeyCode::Char('/') => {
                self.search.focus();
                Action::Handled
            }
            KeyCode::Char('a') => Action::Navigate(Screen::ProductCreate),
            KeyCode::Char('r') => self.load(),
            _ => self.table.handle_key_events(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Table(msg) => self.apply_table_msg(msg),
            Action::SearchProducts(term) => self.apply_search(term),
            Action::ProductsLoaded { request_id, page } => self.apply_page(request_id, page),
            Action::ProductsLoadFailed { request_id, message } => self.apply_error(request_id, message),
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(3)])
            .split(rect);

        self.search.render(f, chunks[0]);

        let key_style = Style::default().fg(Color::Cyan);
        let text_style = Style::default().fg(Color::Gray);
        f.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("a", key_style),
                Span::styled(" add  ", text_style),
                Span::styled("/", key_style),
                Span::styled(" search  ", text_style),
                Span::styled("1-4", key_style),
                Span::styled(" sort  ", text_style),
                Span::styled("r", key_style),
                Span::styled(" refresh", text_style),
            ])),
            chunks[1],
        );

        self.table.render(f, chunks[2]);
    }

    fn captures_input(&self) -> bool {
        self.search.is_focused()
    }
}
