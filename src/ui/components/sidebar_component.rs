//! Sidebar navigation component.
//!
//! Shows the signed-in user, the Dashboard and Products entries and a logout entry.
//! `J`/`K` (or Shift+Down/Up) move between entries and activate them immediately,
//! the same way the global `D` and `P` shortcuts do.

use crate::icons::IconService;
use crate::session::Session;
use crate::ui::core::{Action, Component, Screen};
use crate::utils::format::initials;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarEntry {
    Dashboard,
    Products,
    Logout,
}

impl SidebarEntry {
    pub const ALL: [SidebarEntry; 3] = [SidebarEntry::Dashboard, SidebarEntry::Products, SidebarEntry::Logout];

    fn label(self) -> &'static str {
        match self {
            SidebarEntry::Dashboard => "Dashboard",
            SidebarEntry::Products => "Products",
            SidebarEntry::Logout => "Logout",
        }
    }

    fn icon(self, icons: &IconService) -> &'static str {
        match self {
            SidebarEntry::Dashboard => icons.dashboard(),
            SidebarEntry::Products => icons.products(),
            SidebarEntry::Logout => icons.logout(),
        }
    }

    fn shortcut(self) -> &'static str {
        match self {
            SidebarEntry::Dashboard => "D",
            SidebarEntry::Products => "P",
            SidebarEntry::Logout => "L",
        }
    }

    /// Entry highlighted while `screen` is shown
    fn for_screen(screen: &Screen) -> Option<Self> {
        match screen {
            Screen::Dashboard => Some(SidebarEntry::Dashboard),
            Screen::Products | Screen::ProductCreate | Screen::ProductEdit(_) => Some(SidebarEntry::Products),
            Screen::Login | Screen::Register => None,
        }
    }

    fn activate(self) -> Action {
        match self {
            SidebarEntry::Dashboard => Action::Navigate(Screen::Dashboard),
            SidebarEntry::Products => Action::Navigate(Screen::Products),
            SidebarEntry::Logout => Action::Logout,
        }
    }
}

pub struct SidebarComponent {
    active: Option<SidebarEntry>,
    user_name: Option<String>,
    list_state: ListState,
    icons: IconService,
}

impl SidebarComponent {
    pub fn new(icons: IconService) -> Self {
        Self {
            active: None,
            user_name: None,
            list_state: ListState::default(),
            icons,
        }
    }

    pub fn set_active(&mut self, screen: &Screen) {
        self.active = SidebarEntry::for_screen(screen);
        self.list_state
            .select(self.active.and_then(|entry| SidebarEntry::ALL.iter().position(|e| *e == entry)));
    }

    pub fn active(&self) -> Option<SidebarEntry> {
        self.active
    }

    pub fn set_session(&mut self, session: Option<&Session>) {
        self.user_name = session.map(|s| s.display_name().to_string());
    }

    fn step(&mut self, forward: bool) -> Action {
        let len = SidebarEntry::ALL.len();
        let current = self.list_state.selected().unwrap_or(0);
        let next = if forward { (current + 1) % len } else { (current + len - 1) % len };
        self.list_state.select(Some(next));
        SidebarEntry::ALL[next].activate()
    }

    fn render_user(&self, f: &mut Frame, area: Rect) {
        let name = self.user_name.as_deref().filter(|n| !n.is_empty()).unwrap_or("Guest");
        let lines = vec![
            Line::from(Span::styled(
                format!(" {} ", initials(name)),
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(name.to_string(), Style::default().fg(Color::White))),
        ];
        f.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::DarkGray)),
            ),
            area,
        );
    }
}

impl Component for SidebarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('J') => self.step(true),
            KeyCode::Char('K') => self.step(false),
            KeyCode::Down if key.modifiers.contains(KeyModifiers::SHIFT) => self.step(true),
            KeyCode::Up if key.modifiers.contains(KeyModifiers::SHIFT) => self.step(false),
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Navigate(screen) => {
                self.set_active(&screen);
                Action::Navigate(screen)
            }
            Action::LoggedIn(session) => {
                self.set_session(Some(&session));
                Action::LoggedIn(session)
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0)])
            .split(rect);

        self.render_user(f, chunks[0]);

        let items: Vec<ListItem> = SidebarEntry::ALL
            .iter()
            .map(|entry| {
                let style = if Some(*entry) == self.active {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} {}", entry.icon(&self.icons), entry.label()), style),
                    Span::styled(format!("  ({})", entry.shortcut()), Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title("Navigation")
                    .title_style(Style::default().fg(Color::White))
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }
}
