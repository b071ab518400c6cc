//! Controllers layer - orchestration and coordination.
//!
//! Controllers coordinate between domain models, services and the UI.

pub mod notes;
