use crate::api::{LoginArgs, Product, ProductId, ProductInput, RegisterArgs};
use crate::paging::{ListQuery, PageResult, SortDirection};
use crate::service::DashboardSummary;
use crate::session::Session;

/// Screens the application can show
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Register,
    Dashboard,
    Products,
    ProductCreate,
    ProductEdit(ProductId),
}

impl Screen {
    /// Screens reachable without a session
    pub fn is_public(&self) -> bool {
        matches!(self, Screen::Login | Screen::Register)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Login => "Login",
            Screen::Register => "Register",
            Screen::Dashboard => "Dashboard",
            Screen::Products => "Product Management",
            Screen::ProductCreate => "Add Product",
            Screen::ProductEdit(_) => "Edit Product",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// Messages emitted by the data table; the owning screen turns them into requests
#[derive(Debug, Clone, PartialEq)]
pub enum TableMsg {
    Sort { field: String, direction: SortDirection },
    Page(u32),
    PerPage(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    Navigate(Screen),

    // Authentication
    Login(LoginArgs),
    Register(RegisterArgs),
    LoggedIn(Session),
    AuthFailed(String),
    Logout,
    LoggedOut,
    SessionExpired,

    // Product list
    Table(TableMsg),
    SearchProducts(String),
    LoadProducts {
        request_id: u64,
        query: ListQuery,
    },
    ProductsLoaded {
        request_id: u64,
        page: PageResult<Product>,
    },
    ProductsLoadFailed {
        request_id: u64,
        message: String,
    },

    // Single product
    LoadProduct(ProductId),
    ProductLoaded(Product),
    ProductLoadFailed(String),
    SaveProduct {
        id: Option<ProductId>,
        input: ProductInput,
    },
    ProductSaved {
        created: bool,
    },
    ProductSaveFailed(String),
    DeleteProduct(ProductId),
    ProductDeleted(ProductId),
    ProductDeleteFailed(String),

    // Dashboard
    LoadDashboard,
    DashboardLoaded(DashboardSummary),
    DashboardFailed(String),

    // UI operations
    ShowToast(ToastKind, String),
    DismissToast,
    ShowDialog(DialogType),
    HideDialog,

    // App control
    Quit,
    /// Key consumed by a component, nothing further to do
    Handled,
    None,
}

impl Action {
    /// True when nothing is left to process
    pub fn is_noop(&self) -> bool {
        matches!(self, Action::None | Action::Handled)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DialogType {
    DeleteConfirmation { product_id: ProductId, name: String },
    Error(String),
    Info(String),
    Help,
    Logs,
}
