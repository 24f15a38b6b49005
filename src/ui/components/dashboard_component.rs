//! Dashboard: summary cards and the most recent products.

use crate::api::Product;
use crate::constants::TABLE_NO_PRODUCTS;
use crate::icons::IconService;
use crate::service::DashboardSummary;
use crate::ui::components::data_table::{Column, ColumnKind, DataTable, TableError};
use crate::ui::core::{Action, Component, ToastKind};
use crate::utils::format::{format_currency, group_digits};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct DashboardComponent {
    summary: DashboardSummary,
    loading: bool,
    recent: DataTable<Product>,
}

impl DashboardComponent {
    pub fn new(icons: IconService) -> Result<Self, TableError> {
        let recent = DataTable::new(vec![
            Column::new("name", "Name"),
            Column::new("sku", "SKU"),
            Column::new("quantity", "Stock").kind(ColumnKind::Number),
            Column::new("price", "Price").kind(ColumnKind::Currency),
        ])?
        .without_pagination()
        .with_empty_text(TABLE_NO_PRODUCTS)
        .with_icons(icons);

        Ok(Self {
            summary: DashboardSummary::default(),
            loading: false,
            recent,
        })
    }

    pub fn summary(&self) -> &DashboardSummary {
        &self.summary
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Screen shown; figures are always fetched again
    pub fn enter(&mut self) -> Action {
        self.loading = true;
        self.recent.set_loading(true);
        Action::LoadDashboard
    }

    pub fn apply(&mut self, summary: DashboardSummary) {
        self.loading = false;
        self.recent.set_rows(summary.recent.clone());
        self.recent.set_loading(false);
        self.summary = summary;
    }

    pub fn fail(&mut self) {
        self.loading = false;
        self.recent.set_loading(false);
    }

    /// Card values in display order
    pub fn card_values(&self) -> [(&'static str, String); 3] {
        let value = |text: String| if self.loading { "...".to_string() } else { text };
        [
            (
                "Total Products",
                value(group_digits(i64::try_from(self.summary.total_products).unwrap_or(i64::MAX))),
            ),
            ("Total Stock", value(group_digits(self.summary.total_stock))),
            ("Total Value", value(format_currency(self.summary.total_value))),
        ]
    }

    fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color) {
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(title.to_string(), Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(paragraph, area);
    }
}

impl Component for DashboardComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('r') => self.enter(),
            _ => self.recent.handle_key_events(key),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::DashboardLoaded(summary) => {
                self.apply(summary);
                Action::None
            }
            Action::DashboardFailed(message) => {
                self.fail();
                Action::ShowToast(ToastKind::Error, message)
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Length(1), Constraint::Min(3)])
            .split(rect);

        let cards = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3), Constraint::Ratio(1, 3), Constraint::Ratio(1, 3)])
            .split(chunks[0]);

        let colors = [Color::Cyan, Color::Green, Color::Yellow];
        for ((area, (title, value)), color) in cards.iter().zip(self.card_values()).zip(colors) {
            Self::render_card(f, *area, title, value, color);
        }

        f.render_widget(
            Paragraph::new(Span::styled(
                "Recent Products",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            chunks[1],
        );
        self.recent.render(f, chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paging::PageResult;

    fn product(id: i64, quantity: i64, price: f64) -> Product {
        Product {
            id,
            name: format!("Item {}", id),
            sku: format!("SKU-{}", id),
            quantity,
            price,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn cards_show_placeholder_while_loading() {
        let mut dashboard = DashboardComponent::new(IconService::default()).unwrap();
        assert_eq!(dashboard.enter(), Action::LoadDashboard);
        assert!(dashboard.card_values().iter().all(|(_, value)| value == "..."));
    }

    #[test]
    fn loaded_summary_fills_cards_and_recent_rows() {
        let mut dashboard = DashboardComponent::new(IconService::default()).unwrap();
        dashboard.enter();
        let page = PageResult::new(vec![product(1, 1200, 1500.0), product(2, 3, 2500.5)], 1234, 124, 1);
        dashboard.update(Action::DashboardLoaded(DashboardSummary::from_page(page)));

        let values = dashboard.card_values();
        assert_eq!(values[0].1, "1,234");
        assert_eq!(values[1].1, "1,203");
        assert_eq!(values[2].1, "Rp 4,001");
        assert!(!dashboard.is_loading());
    }

    #[test]
    fn failure_turns_into_error_toast() {
        let mut dashboard = DashboardComponent::new(IconService::default()).unwrap();
        dashboard.enter();
        let action = dashboard.update(Action::DashboardFailed("offline".to_string()));
        assert_eq!(action, Action::ShowToast(ToastKind::Error, "offline".to_string()));
        assert!(!dashboard.is_loading());
    }
}
