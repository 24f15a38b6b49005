//! Utility modules for the Stockroom application.
//!
//! This module contains small helpers shared by the UI and the service layer.
//!
//! # Available Utilities
//!
//! - [`format`] - Display formatting for currency amounts, integers and user names

pub mod format;
