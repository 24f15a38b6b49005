//! Stockroom - a terminal admin client for an inventory HTTP API
//!
//! Sign in against the inventory server, browse products in a paged, sortable and
//! searchable table, and create, edit or delete them from the keyboard.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - Remote inventory API: typed errors, models and the HTTP backend
//! * [`service`] - Session-aware layer between the UI and the backend
//! * [`session`] - Authenticated session and its on-disk persistence
//! * [`paging`] - Sort, page size and list query types
//! * [`validation`] - Form validation rules
//! * [`config`] - Application configuration management
//! * [`ui`] - Terminal user interface components and rendering
//! * [`utils`] - Formatting helpers

/// Remote inventory API client and data models
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging to file and to the in-app logs panel
pub mod logger;

/// List queries, sort state and page results
pub mod paging;

/// Inventory service shared by the UI
pub mod service;

/// Session handling and persistence
pub mod session;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for display formatting
pub mod utils;

/// Validation of the login, registration and product forms
pub mod validation;
