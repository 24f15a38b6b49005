use super::text_input::TextInput;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

/// Search field above the product table.
///
/// `/` focuses it (handled by the owner), `Enter` submits, `Esc` clears and submits an
/// empty term.
pub struct SearchBar {
    input: TextInput,
    focused: bool,
    placeholder: String,
}

impl SearchBar {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            input: TextInput::new("Search (/)"),
            focused: false,
            placeholder: placeholder.into(),
        }
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn term(&self) -> &str {
        self.input.value()
    }
}

impl Component for SearchBar {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.focused {
            return Action::None;
        }
        match key.code {
            KeyCode::Enter => {
                self.focused = false;
                Action::SearchProducts(self.input.value().trim().to_string())
            }
            KeyCode::Esc => {
                self.focused = false;
                self.input.clear();
                Action::SearchProducts(String::new())
            }
            _ => {
                self.input.handle_key(key);
                Action::Handled
            }
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.input.value().is_empty() && !self.focused {
            let mut hint = TextInput::new(self.input.label.clone());
            hint.set_value(self.placeholder.clone());
            hint.render(f, rect, false, None, true);
        } else {
            self.input.render(f, rect, self.focused, None, true);
        }
    }

    fn captures_input(&self) -> bool {
        self.focused
    }
}
