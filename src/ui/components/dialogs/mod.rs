//! Dialog rendering helpers shared by the dialog component

pub mod common;
pub mod scroll_behavior;
pub mod system_dialogs;
