//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Application identity
pub const APP_NAME: &str = "stockroom";
pub const APP_TITLE: &str = "Inventory System";
pub const CONFIG_FILE_NAME: &str = "stockroom.toml";
pub const SESSION_FILE_NAME: &str = "session.json";
pub const LOG_FILE_NAME: &str = "stockroom.log";
pub const ENV_API_URL: &str = "STOCKROOM_API_URL";

// API defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 15;
pub const MAX_API_TIMEOUT_SECS: u64 = 300;

// Table and pagination
/// Selectable page sizes, in selector order
pub const ENTRIES_PER_PAGE_OPTIONS: [u32; 4] = [10, 25, 50, 100];
pub const DEFAULT_ENTRIES_PER_PAGE: u32 = 10;
/// Maximum number of numbered pager buttons
pub const PAGER_WINDOW: u32 = 5;
/// Number of products shown in the dashboard's recent list
pub const DASHBOARD_RECENT_COUNT: usize = 5;

// Toasts
pub const DEFAULT_TOAST_SECONDS: u64 = 5;

// Table placeholders
pub const TABLE_LOADING: &str = "Loading...";
pub const TABLE_NO_DATA: &str = "No data found.";
pub const TABLE_NO_PRODUCTS: &str = "No products found.";

// Success Messages
pub const SUCCESS_PRODUCT_CREATED: &str = "Product created";
pub const SUCCESS_PRODUCT_UPDATED: &str = "Product updated";
pub const SUCCESS_PRODUCT_DELETED: &str = "Product deleted";
pub const SUCCESS_LOGGED_OUT: &str = "Logged out";

// Error Messages
pub const ERROR_PRODUCTS_LOAD_FAILED: &str = "Failed to load products";
pub const ERROR_PRODUCT_LOAD_FAILED: &str = "Failed to load product";
pub const ERROR_PRODUCT_CREATE_FAILED: &str = "Failed to create product";
pub const ERROR_PRODUCT_UPDATE_FAILED: &str = "Failed to update product";
pub const ERROR_PRODUCT_DELETE_FAILED: &str = "Failed to delete product";
pub const ERROR_DASHBOARD_LOAD_FAILED: &str = "Failed to load dashboard data";
pub const ERROR_LOGIN_FAILED: &str = "Login failed";
pub const ERROR_REGISTER_FAILED: &str = "Registration failed";
pub const ERROR_SESSION_EXPIRED: &str = "Session expired";
pub const ERROR_NOT_AUTHENTICATED: &str = "Please log in first";

// Validation Error Messages
pub const VALIDATION_NAME_REQUIRED: &str = "Name is required";
pub const VALIDATION_PRODUCT_NAME_REQUIRED: &str = "Product name is required";
pub const VALIDATION_SKU_REQUIRED: &str = "SKU is required";
pub const VALIDATION_QUANTITY_REQUIRED: &str = "Quantity is required";
pub const VALIDATION_QUANTITY_INVALID: &str = "Quantity must be a whole number of zero or more";
pub const VALIDATION_PRICE_REQUIRED: &str = "Price is required";
pub const VALIDATION_PRICE_INVALID: &str = "Price must be a number of at least 100";
pub const VALIDATION_EMAIL_REQUIRED: &str = "Email is required";
pub const VALIDATION_EMAIL_INVALID: &str = "Email format is invalid";
pub const VALIDATION_PASSWORD_REQUIRED: &str = "Password is required";
pub const VALIDATION_PASSWORD_TOO_SHORT: &str = "Password is required and must be at least 6 characters";

/// Minimum accepted product price
pub const MIN_PRODUCT_PRICE: f64 = 100.0;
/// Minimum accepted password length
pub const MIN_PASSWORD_LENGTH: usize = 6;

// UI Messages
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const DIALOG_TITLE_LOGS: &str = "Logs - Press 'Esc', 'G' or 'q' to close";
pub const DELETE_CONFIRMATION_TEXT: &str =
    "Are you sure you want to delete this product? This action cannot be undone.";

// UI Layout Constants
/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 24;
/// Minimum main area width to preserve usability
pub const MAIN_AREA_MIN_WIDTH: u16 = 40;
/// Maximum number of in-memory log lines kept for the logs dialog
pub const LOG_BUFFER_CAPACITY: usize = 1000;
