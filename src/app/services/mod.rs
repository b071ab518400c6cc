//! Services layer - operations with no UI dependency.
//!
//! - Note file reading and writing
//! - Text helpers

pub mod note_file;
pub mod text_ops;
