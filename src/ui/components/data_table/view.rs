use super::{CellValue, ColumnKind, DataTable, TableBody, TableRow};
use crate::utils::format::{format_currency, group_digits};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table},
    Frame,
};

const HIGHLIGHT_SYMBOL: &str = "▶ ";

pub(super) fn format_cell(value: &CellValue, kind: ColumnKind) -> String {
    match (value, kind) {
        (CellValue::Amount(amount), ColumnKind::Currency) => format_currency(*amount),
        (CellValue::Integer(number), ColumnKind::Currency) => format_currency(*number as f64),
        (CellValue::Integer(number), _) => number.to_string(),
        (CellValue::Amount(amount), _) => {
            if amount.fract() == 0.0 {
                group_digits(*amount as i64)
            } else {
                format!("{:.2}", amount)
            }
        }
        (CellValue::Text(text), _) => text.clone(),
        (CellValue::Empty, _) => "-".to_string(),
    }
}

fn column_constraint(kind: ColumnKind) -> Constraint {
    match kind {
        ColumnKind::Text => Constraint::Fill(2),
        ColumnKind::Number => Constraint::Length(10),
        ColumnKind::Currency => Constraint::Length(18),
    }
}

pub(super) fn render<R: TableRow>(table: &mut DataTable<R>, f: &mut Frame, rect: Rect) {
    let pager = table.pager();
    let (info_area, table_area, pager_area) = if table.paged {
        let chunks = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(if pager.is_some() { 1 } else { 0 }),
        ])
        .split(rect);
        (Some(chunks[0]), chunks[1], pager.as_ref().map(|_| chunks[2]))
    } else {
        (None, rect, None)
    };

    if let Some(area) = info_area {
        render_entries_line(table, f, area);
    }
    render_table(table, f, table_area);
    if let (Some(pager), Some(area)) = (pager, pager_area) {
        render_pager(&pager, f, area);
    }
}

fn render_entries_line<R: TableRow>(table: &DataTable<R>, f: &mut Frame, area: Rect) {
    let (first, last, total) = table.pagination.entry_range();
    let halves = Layout::horizontal([Constraint::Min(0), Constraint::Length(16)]).split(area);

    let showing = Paragraph::new(format!("Showing {} to {} of {} entries", first, last, total))
        .style(Style::default().fg(Color::Gray));
    let per_page = Paragraph::new(Line::from(vec![
        Span::styled("Show: ", Style::default().fg(Color::Gray)),
        Span::styled(
            table.pagination.per_page.to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" (n)", Style::default().fg(Color::DarkGray)),
    ]))
    .alignment(Alignment::Right);

    f.render_widget(showing, halves[0]);
    f.render_widget(per_page, halves[1]);
}

fn render_table<R: TableRow>(table: &mut DataTable<R>, f: &mut Frame, area: Rect) {
    let header_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
    let header = Row::new(table.header()).style(header_style).bottom_margin(1);

    let mut widths = Vec::with_capacity(table.column_count());
    if table.show_row_numbers {
        widths.push(Constraint::Length(5));
    }
    widths.extend(table.columns.iter().map(|column| column_constraint(column.kind)));

    let action_width = table
        .actions
        .iter()
        .map(|action| action.label.chars().count() + 6)
        .sum::<usize>() as u16;
    if !table.actions.is_empty() {
        widths.push(Constraint::Length(action_width));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(Color::Gray));

    match table.body() {
        TableBody::Placeholder(text) => {
            let inner = block.inner(area);
            let widget = Table::new(Vec::<Row>::new(), widths).header(header).block(block);
            f.render_widget(widget, area);

            // Spans every column: drawn across the whole body width under the header
            if inner.height > 2 {
                let row_area = Rect::new(inner.x, inner.y + 2, inner.width, 1);
                let paragraph = Paragraph::new(text)
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center);
                f.render_widget(paragraph, row_area);
            }
        }
        TableBody::Rows(body) => {
            let rows: Vec<Row> = body
                .into_iter()
                .zip(table.rows.iter())
                .map(|(mut cells, record)| {
                    if table.actions.is_empty() {
                        return Row::new(cells);
                    }
                    cells.pop();
                    let mut spans = Vec::new();
                    for action in table.visible_actions(record) {
                        let color = if action.is_destructive() { Color::Red } else { Color::Cyan };
                        spans.push(Span::styled(
                            format!("[{}] {}", action.key, action.label),
                            Style::default().fg(color),
                        ));
                        spans.push(Span::raw("  "));
                    }
                    let mut row_cells: Vec<ratatui::widgets::Cell> =
                        cells.into_iter().map(ratatui::widgets::Cell::from).collect();
                    row_cells.push(ratatui::widgets::Cell::from(Line::from(spans)));
                    Row::new(row_cells)
                })
                .collect();

            let widget = Table::new(rows, widths)
                .header(header)
                .block(block)
                .style(Style::default().fg(Color::White))
                .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
                .highlight_symbol(HIGHLIGHT_SYMBOL);
            f.render_stateful_widget(widget, area, &mut table.table_state);
        }
    }
}

fn render_pager(pager: &super::Pager, f: &mut Frame, area: Rect) {
    let enabled = Style::default().fg(Color::White);
    let disabled = Style::default().fg(Color::DarkGray);

    let mut spans = vec![Span::styled(
        "‹ Prev ",
        if pager.prev_enabled { enabled } else { disabled },
    )];
    for page in &pager.pages {
        if *page == pager.current {
            spans.push(Span::styled(
                format!("[{}]", page),
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(format!(" {} ", page), enabled));
        }
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        "Next ›",
        if pager.next_enabled { enabled } else { disabled },
    ));

    let halves = Layout::horizontal([Constraint::Length(20), Constraint::Min(0)]).split(area);
    let label = Paragraph::new(format!("Page {} of {}", pager.current, pager.total_pages))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(label, halves[0]);
    f.render_widget(Paragraph::new(Line::from(spans)).alignment(Alignment::Right), halves[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_cells_are_grouped() {
        assert_eq!(format_cell(&CellValue::Amount(1500.0), ColumnKind::Currency), "Rp 1,500");
        assert_eq!(format_cell(&CellValue::Integer(7), ColumnKind::Number), "7");
        assert_eq!(format_cell(&CellValue::Empty, ColumnKind::Text), "-");
    }
}
