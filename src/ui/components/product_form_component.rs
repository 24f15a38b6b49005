//! Product create and edit form.

use crate::api::{Product, ProductId};
use crate::ui::components::text_input::TextInput;
use crate::ui::core::{Action, Component, Screen, ToastKind};
use crate::validation::{FieldErrors, ProductForm};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(ProductId),
}

impl FormMode {
    pub fn product_id(self) -> Option<ProductId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }
}

pub struct ProductFormComponent {
    mode: FormMode,
    inputs: [TextInput; 4],
    focus: usize,
    errors: FieldErrors,
    general_error: Option<String>,
    loading: bool,
    saving: bool,
}

impl Default for ProductFormComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductFormComponent {
    pub fn new() -> Self {
        Self {
            mode: FormMode::Create,
            inputs: [
                TextInput::new("Product Name"),
                TextInput::new("SKU"),
                TextInput::new("Quantity"),
                TextInput::new("Price (Rp)"),
            ],
            focus: 0,
            errors: FieldErrors::new(),
            general_error: None,
            loading: false,
            saving: false,
        }
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn general_error(&self) -> Option<&str> {
        self.general_error.as_deref()
    }

    fn reset(&mut self, mode: FormMode) {
        self.mode = mode;
        for input in &mut self.inputs {
            input.clear();
        }
        self.focus = 0;
        self.errors = FieldErrors::new();
        self.general_error = None;
        self.loading = false;
        self.saving = false;
    }

    pub fn start_create(&mut self) {
        self.reset(FormMode::Create);
    }

    /// Clear the form and request the product to edit
    pub fn start_edit(&mut self, id: ProductId) -> Action {
        self.reset(FormMode::Edit(id));
        self.loading = true;
        Action::LoadProduct(id)
    }

    pub fn fill(&mut self, product: &Product) {
        let form = ProductForm::from_product(product);
        for (input, value) in self.inputs.iter_mut().zip([form.name, form.sku, form.quantity, form.price]) {
            input.set_value(value);
        }
        self.loading = false;
    }

    /// Saving failed; keep the entered values so the user can correct them
    pub fn fail(&mut self, message: impl Into<String>) {
        self.saving = false;
        self.general_error = Some(message.into());
    }

    pub fn form(&self) -> ProductForm {
        ProductForm {
            name: self.inputs[0].value().to_string(),
            sku: self.inputs[1].value().to_string(),
            quantity: self.inputs[2].value().to_string(),
            price: self.inputs[3].value().to_string(),
        }
    }

    fn submit(&mut self) -> Action {
        self.general_error = None;
        match self.form().validate() {
            Ok(input) => {
                self.errors = FieldErrors::new();
                self.saving = true;
                Action::SaveProduct {
                    id: self.mode.product_id(),
                    input,
                }
            }
            Err(errors) => {
                if let Some(index) = ProductForm::FIELDS.iter().position(|f| errors.get(f).is_some()) {
                    self.focus = index;
                }
                self.errors = errors;
                Action::Handled
            }
        }
    }
}

impl Component for ProductFormComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::None;
        }
        if self.saving || self.loading {
            return match key.code {
                KeyCode::Esc if self.loading => Action::Navigate(Screen::Products),
                _ => Action::Handled,
            };
        }

        match key.code {
            KeyCode::Esc => Action::Navigate(Screen::Products),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = (self.focus + 1) % self.inputs.len();
                Action::Handled
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = (self.focus + self.inputs.len() - 1) % self.inputs.len();
                Action::Handled
            }
            KeyCode::Enter => self.submit(),
            _ => {
                if self.inputs[self.focus].handle_key(key) {
                    Action::Handled
                } else {
                    Action::None
                }
            }
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ProductLoaded(product) if self.mode == FormMode::Edit(product.id) => {
                self.fill(&product);
                Action::None
            }
            Action::ProductSaveFailed(message) => {
                self.fail(message.clone());
                Action::ShowToast(ToastKind::Error, message)
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        if self.loading {
            f.render_widget(
                Paragraph::new("Loading...")
                    .style(Style::default().fg(Color::Gray))
                    .alignment(Alignment::Center),
                inner,
            );
            return;
        }

        let mut constraints: Vec<Constraint> = self.inputs.iter().map(|_| Constraint::Length(3)).collect();
        constraints.extend([Constraint::Length(2), Constraint::Length(1), Constraint::Min(0)]);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints(constraints)
            .split(inner);

        for (index, input) in self.inputs.iter().enumerate() {
            let error = self.errors.get(ProductForm::FIELDS[index]);
            input.render(f, chunks[index], index == self.focus && !self.saving, error, true);
        }

        let status = if self.saving {
            Line::from(Span::styled("Saving...", Style::default().fg(Color::Yellow)))
        } else if let Some(error) = &self.general_error {
            Line::from(Span::styled(error.clone(), Style::default().fg(Color::Red)))
        } else {
            Line::from("")
        };
        f.render_widget(Paragraph::new(status).wrap(Wrap { trim: true }), chunks[4]);

        let submit_label = match self.mode {
            FormMode::Create => "Enter save",
            FormMode::Edit(_) => "Enter update",
        };
        f.render_widget(
            Paragraph::new(format!("{} • Tab next field • Esc cancel", submit_label))
                .style(Style::default().fg(Color::Gray)),
            chunks[5],
        );
    }

    fn captures_input(&self) -> bool {
        true
    }
}
