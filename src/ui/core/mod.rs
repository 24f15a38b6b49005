//! Core UI functionality for Stockroom.
//!
//! This module contains the fundamental building blocks for the user interface:
//! event handling, the action vocabulary, the component abstraction and background
//! task management.
//!
//! # Module Components
//!
//! - [`actions`] - Action definitions, screens and dialog types
//! - [`component`] - Base component trait
//! - [`context`] - Services and settings shared by components
//! - [`event_handler`] - Keyboard polling and ticks
//! - [`task_manager`] - Background API calls reporting back as actions
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait and turn keys into actions
//! 2. **Actions** are the only messages; background results arrive as actions too
//! 3. **Tasks** run on tokio via the [`TaskManager`] and send their outcome over a channel

pub mod actions;
pub mod component;
pub mod context;
pub mod event_handler;
pub mod task_manager;

pub use actions::{Action, DialogType, Screen, TableMsg, ToastKind};
pub use component::Component;
pub use context::AppContext;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};
