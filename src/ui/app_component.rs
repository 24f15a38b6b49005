//! Root component: owns the screens, routes keys and runs actions to completion.

use crate::constants::{
    APP_TITLE, ERROR_SESSION_EXPIRED, SUCCESS_LOGGED_OUT, SUCCESS_PRODUCT_CREATED, SUCCESS_PRODUCT_DELETED,
    SUCCESS_PRODUCT_UPDATED,
};
use crate::ui::components::{
    AuthComponent, AuthMode, DashboardComponent, DialogComponent, ProductFormComponent, ProductsComponent,
    SidebarComponent, ToastComponent,
};
use crate::ui::core::{
    Action, AppContext, Component, DialogType, EventType, Screen, TaskManager, ToastKind,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::time::Duration;
use tokio::sync::mpsc;

/// Upper bound on follow-up actions produced while handling one action
const MAX_ACTION_CHAIN: usize = 16;

pub struct AppComponent {
    context: AppContext,
    screen: Screen,

    // Screens
    auth: AuthComponent,
    dashboard: DashboardComponent,
    products: ProductsComponent,
    product_form: ProductFormComponent,

    // Chrome
    sidebar: SidebarComponent,
    dialog: DialogComponent,
    toast: ToastComponent,

    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(context: AppContext) -> anyhow::Result<Self> {
        let icons = context.icons.clone();
        let (task_manager, background_action_rx) = TaskManager::new();

        let mut sidebar = SidebarComponent::new(icons.clone());
        sidebar.set_session(context.service.session().as_ref());

        Ok(Self {
            screen: Screen::Login,
            auth: AuthComponent::new(),
            dashboard: DashboardComponent::new(icons.clone())?,
            products: ProductsComponent::new(&context.ui, icons.clone())?,
            product_form: ProductFormComponent::new(),
            sidebar,
            dialog: DialogComponent::new(icons.clone(), context.logger.clone()),
            toast: ToastComponent::new(Duration::from_secs(context.ui.toast_seconds), icons),
            task_manager,
            background_action_rx,
            should_quit: false,
            context,
        })
    }

    /// Show the first screen: the dashboard with a restored session, the login form otherwise
    pub fn start(&mut self) {
        let first = if self.context.service.is_authenticated() {
            Screen::Dashboard
        } else {
            Screen::Login
        };
        self.context
            .logger
            .log(format!("Starting against {}", self.context.service.backend_url()));
        self.dispatch(Action::Navigate(first));
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn products(&self) -> &ProductsComponent {
        &self.products
    }

    pub fn dashboard(&self) -> &DashboardComponent {
        &self.dashboard
    }

    pub fn product_form(&self) -> &ProductFormComponent {
        &self.product_form
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn toast(&self) -> &ToastComponent {
        &self.toast
    }

    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    fn screen_component(&mut self) -> &mut dyn Component {
        match self.screen {
            Screen::Login | Screen::Register => &mut self.auth,
            Screen::Dashboard => &mut self.dashboard,
            Screen::Products => &mut self.products,
            Screen::ProductCreate | Screen::ProductEdit(_) => &mut self.product_form,
        }
    }

    /// Shortcuts available whenever no text field owns the keyboard
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        let signed_in = !self.screen.is_public();
        match key.code {
            KeyCode::Char('q') => {
                self.context.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('x') => Action::DismissToast,
            KeyCode::Char('D') if signed_in => Action::Navigate(Screen::Dashboard),
            KeyCode::Char('P') if signed_in => Action::Navigate(Screen::Products),
            KeyCode::Char('L') if signed_in => Action::Logout,
            _ => Action::None,
        }
    }

    /// Dialog first, then the active screen, then the sidebar and global shortcuts
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.context.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        let screen = self.screen_component();
        let action = screen.handle_key_events(key);
        if !matches!(action, Action::None) || screen.captures_input() {
            return action;
        }

        if !self.screen.is_public() {
            let sidebar_action = self.sidebar.handle_key_events(key);
            if !matches!(sidebar_action, Action::None) {
                return sidebar_action;
            }
        }

        self.handle_global_key(key)
    }

    /// Run `action` and every follow-up action it produces
    pub fn dispatch(&mut self, action: Action) {
        let mut action = action;
        for _ in 0..MAX_ACTION_CHAIN {
            if action.is_noop() {
                return;
            }
            let pending = self.update(action);
            action = self.handle_app_action(pending);
        }
        log::warn!("Action chain cut off after {} steps: {:?}", MAX_ACTION_CHAIN, action);
    }

    fn notify(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast.show(kind, message);
    }

    /// Switch screens, enforcing the login guard, and return the screen's first request
    fn navigate(&mut self, requested: Screen) -> Action {
        let authenticated = self.context.service.is_authenticated();
        let screen = if !authenticated && !requested.is_public() {
            Screen::Login
        } else if authenticated && requested.is_public() {
            Screen::Dashboard
        } else {
            requested.clone()
        };
        if screen != requested {
            log::debug!("Redirected from {:?} to {:?}", requested, screen);
        }

        self.context.logger.log(format!("Navigate: {}", screen.title()));
        self.sidebar.set_active(&screen);
        self.screen = screen.clone();

        match screen {
            Screen::Login => {
                self.auth.enter(AuthMode::Login);
                Action::None
            }
            Screen::Register => {
                self.auth.enter(AuthMode::Register);
                Action::None
            }
            Screen::Dashboard => self.dashboard.enter(),
            Screen::Products => self.products.enter(),
            Screen::ProductCreate => {
                self.product_form.start_create();
                Action::None
            }
            Screen::ProductEdit(id) => self.product_form.start_edit(id),
        }
    }

    fn end_session(&mut self) {
        self.sidebar.set_session(None);
        self.dialog.update(Action::HideDialog);
    }

    /// Handle actions that need services or cross screen coordination
    pub fn handle_app_action(&mut self, action: Action) -> Action {
        let service = self.context.service.clone();
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::Navigate(screen) => self.navigate(screen),
            Action::ShowToast(kind, message) => {
                self.notify(kind, message);
                Action::None
            }

            Action::Login(args) => {
                self.context.logger.log(format!("Signing in as {}", args.email));
                self.task_manager.spawn_login(service, args);
                Action::None
            }
            Action::Register(args) => {
                self.context.logger.log(format!("Registering {}", args.email));
                self.task_manager.spawn_register(service, args);
                Action::None
            }
            Action::LoggedIn(session) => {
                self.context
                    .logger
                    .log(format!("Signed in as '{}'", session.display_name()));
                self.sidebar.set_session(Some(&session));
                Action::Navigate(Screen::Dashboard)
            }
            Action::Logout => {
                self.task_manager.spawn_logout(service);
                Action::None
            }
            Action::LoggedOut => {
                self.end_session();
                self.notify(ToastKind::Success, SUCCESS_LOGGED_OUT);
                Action::Navigate(Screen::Login)
            }
            Action::SessionExpired => {
                self.context.logger.log("Session expired, returning to login".to_string());
                self.end_session();
                self.notify(ToastKind::Error, ERROR_SESSION_EXPIRED);
                Action::Navigate(Screen::Login)
            }

            Action::LoadProducts { request_id, query } => {
                self.task_manager.spawn_products_load(service, request_id, query);
                Action::None
            }
            Action::LoadProduct(id) => {
                self.task_manager.spawn_product_load(service, id);
                Action::None
            }
            Action::ProductLoadFailed(message) => {
                self.notify(ToastKind::Error, message);
                Action::Navigate(Screen::Products)
            }
            Action::SaveProduct { id, input } => {
                self.task_manager.spawn_product_save(service, id, input);
                Action::None
            }
            Action::ProductSaved { created } => {
                let message = if created {
                    SUCCESS_PRODUCT_CREATED
                } else {
                    SUCCESS_PRODUCT_UPDATED
                };
                self.notify(ToastKind::Success, message);
                Action::Navigate(Screen::Products)
            }
            Action::DeleteProduct(id) => {
                self.context.logger.log(format!("Deleting product {}", id));
                self.task_manager.spawn_product_delete(service, id);
                Action::None
            }
            Action::ProductDeleted(_) => {
                self.notify(ToastKind::Success, SUCCESS_PRODUCT_DELETED);
                if self.screen == Screen::Products {
                    self.products.load()
                } else {
                    Action::None
                }
            }
            Action::ProductDeleteFailed(message) => {
                self.notify(ToastKind::Error, message);
                Action::None
            }
            Action::LoadDashboard => {
                self.task_manager.spawn_dashboard_load(service);
                Action::None
            }

            // Anything left only needs a redraw
            _ => Action::None,
        }
    }

    /// Drain results of finished background tasks
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            log::debug!("Background: received {:?}", action);
            actions.push(action);
        }

        let finished = self.task_manager.cleanup_finished_tasks();
        if !finished.is_empty() {
            log::debug!("Background: cleaned up {} finished tasks", finished.len());
        }
        actions
    }

    /// Expire the toast and apply background results; returns whether anything changed
    pub fn tick(&mut self) -> bool {
        let mut changed = self.toast.tick();
        for action in self.process_background_actions() {
            self.dispatch(action);
            changed = true;
        }
        changed
    }

    /// Feed one terminal event through the app; returns whether a redraw is needed
    pub fn handle_event(&mut self, event: EventType) -> bool {
        match event {
            EventType::Key(key) => {
                let action = self.route_key(key);
                self.dispatch(action);
                true
            }
            EventType::Resize(_, _) => true,
            EventType::Tick => self.tick(),
            EventType::Other => false,
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let busy = if self.task_manager.task_count() > 0 {
            format!(" {} ", self.context.icons.spinner())
        } else {
            String::new()
        };
        let header = Paragraph::new(Line::from(vec![
            Span::styled(
                self.screen.title(),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(busy, Style::default().fg(Color::Yellow)),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!(" {} ", APP_TITLE))
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(header, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let hints: &[(&str, &str)] = match self.screen {
            Screen::Products => &[("j/k", "move"), ("h/l", "page"), ("n", "per page"), ("e", "edit"), ("d", "delete")],
            Screen::ProductCreate | Screen::ProductEdit(_) => &[("Enter", "save"), ("Esc", "cancel")],
            _ => &[("r", "refresh")],
        };
        let common: [(&str, &str); 5] = [("D", "dashboard"), ("P", "products"), ("L", "logout"), ("?", "help"), ("q", "quit")];

        let mut spans = Vec::new();
        for (key, label) in hints.iter().chain(common.iter()) {
            spans.push(Span::styled(*key, Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(format!(" {}  ", label), Style::default().fg(Color::Gray)));
        }
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Every component sees the action and passes on what it does not consume
        let action = self.dialog.update(action);
        let action = self.toast.update(action);
        let action = self.sidebar.update(action);
        let action = self.auth.update(action);
        let action = self.dashboard.update(action);
        let action = self.products.update(action);
        self.product_form.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if self.screen.is_public() {
            self.auth.render(f, rect);
        } else {
            let (sidebar_area, main_area) = LayoutManager::shell_layout(rect);
            let (header_area, body_area, footer_area) = LayoutManager::main_layout(main_area);

            if sidebar_area.width > 0 {
                self.sidebar.render(f, sidebar_area);
            }
            self.render_header(f, header_area);
            self.screen_component().render(f, body_area);
            self.render_footer(f, footer_area);
        }

        self.toast.render(f, rect);
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
