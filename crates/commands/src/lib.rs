//! Command implementations for the OpenHue CLI
//!
//! Each command exposes an `execute_with_deps` entry taking its side effects
//! explicitly, and an `execute` entry wiring the real ones.

/// Command implementations module
pub mod commands;

/// Console user interface implementations
pub mod ui;

// Re-export all commands at the crate root for easier access
pub use commands::{auth, discover, get, setup};
pub use ui::{RealUserInterface, TestUserInterface};
