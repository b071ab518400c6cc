//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Session and its undo/redo History
//! - Actions and the messages of the event system
//! - Font and application settings

pub mod action;
pub mod font;
pub mod history;
pub mod messages;
pub mod session;
pub mod settings;

pub use action::Action;
pub use font::{FontSpec, FontStyle};
pub use history::History;
pub use messages::Message;
pub use session::Session;
pub use settings::{AppSettings, ThemeMode};
