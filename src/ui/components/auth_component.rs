//! Login and registration screen.

use crate::constants::APP_TITLE;
use crate::ui::components::text_input::TextInput;
use crate::ui::core::{Action, Component, Screen};
use crate::ui::layout::LayoutManager;
use crate::validation::{FieldErrors, LoginForm, RegisterForm};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Register",
        }
    }

    fn busy_text(self) -> &'static str {
        match self {
            AuthMode::Login => "Signing in...",
            AuthMode::Register => "Registering...",
        }
    }

    fn fields(self) -> &'static [&'static str] {
        match self {
            AuthMode::Login => &["email", "password"],
            AuthMode::Register => &["name", "email", "password"],
        }
    }
}

pub struct AuthComponent {
    mode: AuthMode,
    name: TextInput,
    email: TextInput,
    password: TextInput,
    focus: usize,
    errors: FieldErrors,
    general_error: Option<String>,
    busy: bool,
    reveal_password: bool,
}

impl Default for AuthComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthComponent {
    pub fn new() -> Self {
        Self {
            mode: AuthMode::Login,
            name: TextInput::new("Name"),
            email: TextInput::new("Email"),
            password: TextInput::masked("Password"),
            focus: 0,
            errors: FieldErrors::new(),
            general_error: None,
            busy: false,
            reveal_password: false,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    pub fn focused_field(&self) -> &'static str {
        self.mode.fields()[self.focus]
    }

    /// Show the form for `mode`; the password never survives a switch
    pub fn enter(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.focus = 0;
        self.errors = FieldErrors::new();
        self.general_error = None;
        self.busy = false;
        self.reveal_password = false;
        self.password.clear();
    }

    /// Server refused the credentials or the request failed
    pub fn fail(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.general_error = Some(message.into());
    }

    fn input_mut(&mut self, field: &str) -> &mut TextInput {
        match field {
            "name" => &mut self.name,
            "email" => &mut self.email,
            _ => &mut self.password,
        }
    }

    fn input(&self, field: &str) -> &TextInput {
        match field {
            "name" => &self.name,
            "email" => &self.email,
            _ => &self.password,
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let len = self.mode.fields().len();
        self.focus = if forward { (self.focus + 1) % len } else { (self.focus + len - 1) % len };
    }

    fn submit(&mut self) -> Action {
        self.general_error = None;
        let action = match self.mode {
            AuthMode::Login => LoginForm {
                email: self.email.value().to_string(),
                password: self.password.value().to_string(),
            }
            .validate()
            .map(Action::Login),
            AuthMode::Register => RegisterForm {
                name: self.name.value().to_string(),
                email: self.email.value().to_string(),
                password: self.password.value().to_string(),
            }
            .validate()
            .map(Action::Register),
        };

        match action {
            Ok(action) => {
                self.errors = FieldErrors::new();
                self.busy = true;
                action
            }
            Err(errors) => {
                if let Some(index) = self.mode.fields().iter().position(|f| errors.get(f).is_some()) {
                    self.focus = index;
                }
                self.errors = errors;
                Action::Handled
            }
        }
    }
}

impl Component for AuthComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('s') => {
                    self.reveal_password = !self.reveal_password;
                    Action::Handled
                }
                KeyCode::Char('r') if self.mode == AuthMode::Login && !self.busy => {
                    Action::Navigate(Screen::Register)
                }
                KeyCode::Char('l') if self.mode == AuthMode::Register && !self.busy => {
                    Action::Navigate(Screen::Login)
                }
                _ => Action::None,
            };
        }

        if self.busy {
            return Action::Handled;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.cycle_focus(true);
                Action::Handled
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.cycle_focus(false);
                Action::Handled
            }
            KeyCode::Enter => self.submit(),
            _ => {
                let field = self.focused_field();
                if self.input_mut(field).handle_key(key) {
                    Action::Handled
                } else {
                    Action::None
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::AuthFailed(message) => {
                self.fail(message);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let fields = self.mode.fields();
        let height = fields.len() as u16 * 3 + 8;
        let area = LayoutManager::centered_fixed(54, height, rect);
        f.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} - {} ", APP_TITLE, self.mode.title()))
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();
        constraints.extend([Constraint::Length(2), Constraint::Length(1), Constraint::Min(0)]);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(inner);

        for (index, field) in fields.iter().enumerate() {
            let focused = index == self.focus && !self.busy;
            self.input(field)
                .render(f, chunks[index], focused, self.errors.get(field), self.reveal_password);
        }

        let status = if self.busy {
            Line::from(Span::styled(self.mode.busy_text(), Style::default().fg(Color::Yellow)))
        } else if let Some(error) = &self.general_error {
            Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)))
        } else {
            Line::from("")
        };
        f.render_widget(
            Paragraph::new(status).alignment(Alignment::Center).wrap(Wrap { trim: true }),
            chunks[fields.len()],
        );

        let switch_hint = match self.mode {
            AuthMode::Login => "Ctrl+R register",
            AuthMode::Register => "Ctrl+L login",
        };
        f.render_widget(
            Paragraph::new(format!("Enter submit • Tab next field • Ctrl+S show password • {}", switch_hint))
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center),
            chunks[fields.len() + 1],
        );
    }

    fn captures_input(&self) -> bool {
        true
    }
}
