//! Core functionality for the OpenHue CLI
//!
//! This crate contains the foundational types used across the OpenHue CLI:
//! loading the local settings file, building HTTP clients for the Hue bridge
//! and the dependency injection interfaces consumed by command handlers.

#![deny(missing_docs)]

/// HTTP client construction for the Hue bridge
pub mod client;
/// Configuration constants
pub mod config;
/// Explicit application context handed to command handlers
pub mod context;
/// Dependency injection traits
pub mod deps;
/// Error types
pub mod error;
/// Settings file loading and persistence
pub mod settings;

// Re-export commonly used types at the crate root
pub use client::{ApplicationKeyAuth, HueClient, RequestEditor, TransportConfig};
pub use config::{
    APPLICATION_KEY_HEADER, CONFIG_DIR_ENV_VAR, CONFIG_DIR_NAME, CONFIG_FILE_NAME,
    EXEMPT_COMMANDS, NOT_CONFIGURED_MESSAGE, is_exempt,
};
pub use context::{AppContext, Startup, startup};
pub use deps::{MessageStyle, UserInterface};
pub use error::HueError;
pub use settings::{ConfigState, Settings, SettingsStore};
