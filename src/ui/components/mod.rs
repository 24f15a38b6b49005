//! Reusable UI components and the application screens built from them

// Building blocks
pub mod data_table;
pub mod dialogs;
pub mod search_bar;
pub mod text_input;
pub mod toast;

// Chrome
pub mod dialog_component;
pub mod sidebar_component;

// Screens
pub mod auth_component;
pub mod dashboard_component;
pub mod product_form_component;
pub mod products_component;

// Component exports
pub use auth_component::{AuthComponent, AuthMode};
pub use dashboard_component::DashboardComponent;
pub use data_table::DataTable;
pub use dialog_component::DialogComponent;
pub use product_form_component::{FormMode, ProductFormComponent};
pub use products_component::ProductsComponent;
pub use search_bar::SearchBar;
pub use sidebar_component::SidebarComponent;
pub use text_input::TextInput;
pub use toast::ToastComponent;
