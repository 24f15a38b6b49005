//! Single line text field with a character cursor.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub label: String,
    value: String,
    /// Cursor position in characters, not bytes
    cursor: usize,
    masked: bool,
}

impl TextInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Field whose content is hidden unless revealed at render time
    pub fn masked(label: impl Into<String>) -> Self {
        Self {
            masked: true,
            ..Self::new(label)
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(index, _)| index)
    }

    pub fn insert(&mut self, c: char) {
        let index = self.byte_index(self.cursor);
        self.value.insert(index, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let index = self.byte_index(self.cursor);
        self.value.remove(index);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let index = self.byte_index(self.cursor);
            self.value.remove(index);
        }
    }

    /// Apply an editing key; returns false when the key is not an editing key
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => self.insert(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.value.chars().count()),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.value.chars().count(),
            _ => return false,
        }
        true
    }

    fn display_value(&self, reveal: bool) -> String {
        if self.masked && !reveal {
            std::iter::repeat(MASK_CHAR).take(self.value.chars().count()).collect()
        } else {
            self.value.clone()
        }
    }

    /// Draw the field in a bordered box; `error` is shown in the bottom border
    pub fn render(&self, f: &mut Frame, area: Rect, focused: bool, error: Option<&str>, reveal: bool) {
        let border_color = match (error, focused) {
            (Some(_), _) => Color::Red,
            (None, true) => Color::Cyan,
            (None, false) => Color::Gray,
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} ", self.label))
            .title_style(Style::default().fg(Color::White))
            .style(Style::default().fg(border_color));
        if let Some(message) = error {
            block = block.title_bottom(Line::from(Span::styled(
                format!(" {} ", message),
                Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
            )));
        }

        let inner = block.inner(area);
        let text = self.display_value(reveal);

        // Scroll horizontally so the cursor stays visible
        let width = inner.width.max(1) as usize;
        let offset = (self.cursor + 1).saturating_sub(width);
        let visible: String = text.chars().skip(offset).take(width).collect();

        f.render_widget(
            Paragraph::new(visible).block(block).style(Style::default().fg(Color::White)),
            area,
        );

        if focused && inner.width > 0 && inner.height > 0 {
            let x = inner.x + (self.cursor - offset) as u16;
            f.set_cursor_position(Position::new(x, inner.y));
        }
    }
}
