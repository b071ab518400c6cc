//! Application layer - organized by Clean Architecture principles.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Session, History, Action, Settings)
//! - `controllers/` - Action dispatch over the session
//! - `services/` - Note file I/O and text helpers
//! - `infrastructure/` - Errors, logging, platform detection
//! - `state.rs` - Binds the controller to the FLTK widgets

pub mod controllers;
pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use controllers::notes::{FilePrompt, NoteController, Outcome};
pub use domain::{Action, AppSettings, FontSpec, FontStyle, History, Message, Session, ThemeMode};
pub use infrastructure::error::{AppError, Result};
pub use infrastructure::logging::init_logging;
pub use infrastructure::platform::detect_system_dark_mode;
