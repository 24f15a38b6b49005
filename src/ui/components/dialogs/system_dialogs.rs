use super::common::{create_dialog_block, create_instructions_paragraph, render_scrollable_lines, shortcuts};
use crate::constants::{DELETE_CONFIRMATION_TEXT, DIALOG_TITLE_LOGS};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, ScrollbarState, Wrap},
    Frame,
};

pub const HELP_TEXT: &str = r"
STOCKROOM - Inventory Terminal Client
=====================================

NAVIGATION
----------
D           Go to the dashboard
P           Go to the product list
L           Log out
Esc         Cancel action or close dialogs

PRODUCT LIST
------------
j/k ↑↓      Move the row cursor
h/l ←→      Previous / next page
Home/End    First / last page
1-9         Sort by column (press again to flip direction)
n           Cycle entries per page (10, 25, 50, 100)
/           Search by name or SKU (Enter applies, Esc clears)
a           Add a product
e / Enter   Edit the selected product
d           Delete the selected product (with confirmation)

FORMS
-----
Tab         Next field
Shift+Tab   Previous field
Enter       Submit
Ctrl+S      Show or hide the password
Ctrl+R      Switch to the registration form
Ctrl+L      Switch to the login form

GENERAL
-------
?           Toggle this help
G           Toggle the logs panel
x           Dismiss the notification
q           Quit (outside of text fields)
Ctrl+C      Quit

Press 'Esc' or '?' to close this help panel
";

/// Split the content area of a bordered dialog from its instruction line
fn dialog_sections(dialog_area: Rect) -> (Rect, Rect) {
    let inner = Rect::new(
        dialog_area.x + 2,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(4),
        dialog_area.height.saturating_sub(2),
    );
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);
    (chunks[0], chunks[1])
}

pub fn render_delete_confirmation_dialog(f: &mut Frame, area: Rect, icons: &IconService, product_name: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(50, 9, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(format!(" {} Delete Product ", icons.warning()), Color::Red);
    f.render_widget(block, dialog_area);

    let (content, instructions) = dialog_sections(dialog_area);
    let message = Paragraph::new(vec![
        Line::from(Span::styled(
            format!("\"{}\"", product_name),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(DELETE_CONFIRMATION_TEXT, Style::default().fg(Color::White))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    f.render_widget(message, content);

    f.render_widget(
        create_instructions_paragraph(&[shortcuts::ENTER_CONFIRM, shortcuts::SEPARATOR, shortcuts::ESC_CANCEL]),
        instructions,
    );
}

fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: String,
    color: Color,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let dialog_area = LayoutManager::centered_rect_lines(60, 10, area);
    f.render_widget(Clear, dialog_area);
    f.render_widget(create_dialog_block(title, color), dialog_area);

    let (content, instructions) = dialog_sections(dialog_area);
    let lines: Vec<String> = message.lines().map(str::to_string).collect();
    let offset = render_scrollable_lines(f, content, &lines, scroll_offset, scrollbar_state);

    f.render_widget(
        create_instructions_paragraph(&[shortcuts::ESC_CLOSE, shortcuts::SEPARATOR, shortcuts::SCROLL]),
        instructions,
    );
    offset
}

pub fn render_info_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let title = format!(" {} Info ", icons.info());
    render_message_dialog(f, area, title, Color::Blue, message, scroll_offset, scrollbar_state)
}

pub fn render_error_dialog(
    f: &mut Frame,
    area: Rect,
    icons: &IconService,
    message: &str,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let title = format!(" {} Error ", icons.error());
    render_message_dialog(f, area, title, Color::Red, message, scroll_offset, scrollbar_state)
}

fn render_panel(
    f: &mut Frame,
    area: Rect,
    title: &str,
    lines: &[String],
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let panel_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, panel_area);
    f.render_widget(create_dialog_block(format!(" {} ", title), Color::White), panel_area);

    let content = Rect::new(
        panel_area.x + 2,
        panel_area.y + 1,
        panel_area.width.saturating_sub(3),
        panel_area.height.saturating_sub(2),
    );
    render_scrollable_lines(f, content, lines, scroll_offset, scrollbar_state)
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) -> usize {
    let lines: Vec<String> = HELP_TEXT.lines().map(str::to_string).collect();
    render_panel(
        f,
        area,
        "Help - Press 'Esc' or '?' to close",
        &lines,
        scroll_offset,
        scrollbar_state,
    )
}

pub fn render_logs_dialog(
    f: &mut Frame,
    area: Rect,
    logger: &Logger,
    scroll_offset: usize,
    scrollbar_state: &mut ScrollbarState,
) -> usize {
    let mut lines = logger.get_logs();
    if lines.is_empty() {
        lines.push("No logs yet".to_string());
    }
    render_panel(f, area, DIALOG_TITLE_LOGS, &lines, scroll_offset, scrollbar_state)
}
