//! Modal dialog component.
//!
//! Only one dialog is visible at a time. While it is, every key goes to it: the delete
//! confirmation waits for `Enter` or `Esc`, the help and logs panels scroll, and info or
//! error messages close on any key that is not a scroll key.

use crate::icons::IconService;
use crate::logger::Logger;
use crate::ui::components::dialogs::{scroll_behavior::DialogScroll, system_dialogs};
use crate::ui::core::{Action, Component, DialogType};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

pub struct DialogComponent {
    pub dialog_type: Option<DialogType>,
    scroll: DialogScroll,
    icons: IconService,
    logger: Logger,
}

impl DialogComponent {
    pub fn new(icons: IconService, logger: Logger) -> Self {
        Self {
            dialog_type: None,
            scroll: DialogScroll::default(),
            icons,
            logger,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.dialog_type.is_some()
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset
    }

    fn clear_dialog(&mut self) {
        self.dialog_type = None;
        self.scroll.reset();
    }

    /// Scroll keys shared by every scrollable dialog; returns false for other keys
    fn handle_scroll_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.up(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::Home => self.scroll.to_top(),
            KeyCode::End => self.scroll.to_bottom(),
            _ => return false,
        }
        true
    }

    fn confirm_delete(&mut self) -> Action {
        let Some(DialogType::DeleteConfirmation { product_id, .. }) = self.dialog_type.take() else {
            return Action::Handled;
        };
        self.clear_dialog();
        Action::DeleteProduct(product_id)
    }
}

impl Component for DialogComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        let Some(dialog_type) = &self.dialog_type else {
            return Action::None;
        };

        match dialog_type {
            DialogType::DeleteConfirmation { .. } => match key.code {
                KeyCode::Enter => self.confirm_delete(),
                KeyCode::Esc => Action::HideDialog,
                _ => Action::Handled,
            },
            DialogType::Info(_) | DialogType::Error(_) => {
                if self.handle_scroll_key(key) {
                    Action::Handled
                } else {
                    Action::HideDialog
                }
            }
            DialogType::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::Handled
                }
            },
            DialogType::Logs => match key.code {
                KeyCode::Esc | KeyCode::Char('G') | KeyCode::Char('q') => Action::HideDialog,
                _ => {
                    self.handle_scroll_key(key);
                    Action::Handled
                }
            },
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowDialog(dialog_type) => {
                self.scroll.reset();
                self.dialog_type = Some(dialog_type);
                Action::None
            }
            Action::HideDialog => {
                self.clear_dialog();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(dialog_type) = self.dialog_type.clone() else {
            return;
        };

        let offset = self.scroll.offset;
        let scrollbar = &mut self.scroll.scrollbar;
        let used_offset = match dialog_type {
            DialogType::DeleteConfirmation { name, .. } => {
                system_dialogs::render_delete_confirmation_dialog(f, rect, &self.icons, &name);
                0
            }
            DialogType::Info(message) => {
                system_dialogs::render_info_dialog(f, rect, &self.icons, &message, offset, scrollbar)
            }
            DialogType::Error(message) => {
                system_dialogs::render_error_dialog(f, rect, &self.icons, &message, offset, scrollbar)
            }
            DialogType::Help => system_dialogs::render_help_dialog(f, rect, offset, scrollbar),
            DialogType::Logs => system_dialogs::render_logs_dialog(f, rect, &self.logger, offset, scrollbar),
        };
        // Keep the stored offset inside the content so scrolling back up responds at once
        self.scroll.offset = used_offset;
    }

    fn captures_input(&self) -> bool {
        self.is_visible()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dialog() -> DialogComponent {
        DialogComponent::new(IconService::default(), Logger::new())
    }

    #[test]
    fn enter_confirms_delete_and_closes() {
        let mut dialog = dialog();
        dialog.update(Action::ShowDialog(DialogType::DeleteConfirmation {
            product_id: 7,
            name: "Widget".to_string(),
        }));

        assert_eq!(dialog.handle_key_events(key(KeyCode::Char('y'))), Action::Handled);
        assert!(dialog.is_visible());
        assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::DeleteProduct(7));
        assert!(!dialog.is_visible());
    }

    #[test]
    fn escape_cancels_delete() {
        let mut dialog = dialog();
        dialog.update(Action::ShowDialog(DialogType::DeleteConfirmation {
            product_id: 7,
            name: "Widget".to_string(),
        }));
        let action = dialog.handle_key_events(key(KeyCode::Esc));
        assert_eq!(action, Action::HideDialog);
        dialog.update(action);
        assert!(!dialog.is_visible());
    }

    #[test]
    fn scroll_keys_do_not_close_error() {
        let mut dialog = dialog();
        dialog.update(Action::ShowDialog(DialogType::Error("boom".to_string())));
        assert_eq!(dialog.handle_key_events(key(KeyCode::Char('j'))), Action::Handled);
        assert_eq!(dialog.scroll_offset(), 1);
        assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::HideDialog);
    }

    #[test]
    fn hidden_dialog_ignores_keys() {
        let mut dialog = dialog();
        assert_eq!(dialog.handle_key_events(key(KeyCode::Enter)), Action::None);
        assert!(!dialog.captures_input());
    }
}
