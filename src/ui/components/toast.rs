//! Transient notification in the top right corner.

use crate::icons::IconService;
use crate::ui::core::{Action, Component, ToastKind};
use crate::ui::layout::LayoutManager;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    shown_at: Instant,
}

pub struct ToastComponent {
    current: Option<Toast>,
    lifetime: Duration,
    icons: IconService,
}

impl ToastComponent {
    pub fn new(lifetime: Duration, icons: IconService) -> Self {
        Self {
            current: None,
            lifetime,
            icons,
        }
    }

    /// Show a toast, replacing any visible one
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.current = Some(Toast {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Drop the toast once its lifetime has passed; returns true when it disappeared
    pub fn tick(&mut self) -> bool {
        self.expire_at(Instant::now())
    }

    pub fn expire_at(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|toast| now.saturating_duration_since(toast.shown_at) >= self.lifetime);
        if expired {
            self.current = None;
        }
        expired
    }
}

impl Component for ToastComponent {
    fn handle_key_events(&mut self, _key: KeyEvent) -> Action {
        Action::None
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ShowToast(kind, message) => {
                self.show(kind, message);
                Action::None
            }
            Action::DismissToast => {
                self.dismiss();
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(toast) = &self.current else {
            return;
        };

        let (color, icon) = match toast.kind {
            ToastKind::Success => (Color::Green, self.icons.success()),
            ToastKind::Error => (Color::Red, self.icons.error()),
            ToastKind::Info => (Color::Blue, self.icons.info()),
        };

        let text = format!("{} {}", icon, toast.message);
        let area = LayoutManager::toast_area(rect, text.chars().count() as u16 + 3);
        f.render_widget(Clear, area);

        let paragraph = Paragraph::new(Line::from(vec![
            Span::styled(text, Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
            Span::styled("  x", Style::default().fg(Color::Gray)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
        f.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_expires_after_lifetime() {
        let mut toasts = ToastComponent::new(Duration::from_secs(5), IconService::default());
        toasts.show(ToastKind::Success, "Product created");
        let shown_at = toasts.current().map(|t| t.shown_at).unwrap();

        assert!(!toasts.expire_at(shown_at + Duration::from_secs(4)));
        assert!(toasts.current().is_some());
        assert!(toasts.expire_at(shown_at + Duration::from_secs(5)));
        assert!(toasts.current().is_none());
    }

    #[test]
    fn new_toast_replaces_old() {
        let mut toasts = ToastComponent::new(Duration::from_secs(5), IconService::default());
        toasts.update(Action::ShowToast(ToastKind::Info, "one".to_string()));
        toasts.update(Action::ShowToast(ToastKind::Error, "two".to_string()));
        assert_eq!(toasts.current().map(|t| t.message.as_str()), Some("two"));
        toasts.update(Action::DismissToast);
        assert!(toasts.current().is_none());
    }
}
