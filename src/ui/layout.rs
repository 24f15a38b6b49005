//! Layout management and calculations

use crate::constants::{MAIN_AREA_MIN_WIDTH, SIDEBAR_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into sidebar and main area.
    ///
    /// The sidebar shrinks on narrow terminals so the main area keeps its minimum width.
    #[must_use]
    pub fn shell_layout(area: Rect) -> (Rect, Rect) {
        let sidebar_width = SIDEBAR_WIDTH.min(area.width.saturating_sub(MAIN_AREA_MIN_WIDTH));
        let chunks = Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Min(0)]).split(area);
        (chunks[0], chunks[1])
    }

    /// Split the main area into header, body and a one line key hint footer
    #[must_use]
    pub fn main_layout(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)]).split(area);
        (chunks[0], chunks[1], chunks[2])
    }

    /// Area for a toast in the top right corner
    #[must_use]
    pub fn toast_area(area: Rect, message_width: u16) -> Rect {
        let width = (message_width + 4).min(area.width);
        let height = 3.min(area.height);
        Rect::new(
            area.x + area.width.saturating_sub(width + 1),
            area.y + 1.min(area.height.saturating_sub(height)),
            width,
            height,
        )
    }

    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Calculate a centered rectangle with percentage width and fixed line height
    #[must_use]
    pub fn centered_rect_lines(percent_x: u16, height_lines: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(height_lines),
                Constraint::Min(0),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Centered box of fixed size, clipped to the area
    #[must_use]
    pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
        let width = width.min(r.width);
        let height = height.min(r.height);
        Rect::new(
            r.x + (r.width - width) / 2,
            r.y + (r.height - height) / 2,
            width,
            height,
        )
    }
}
