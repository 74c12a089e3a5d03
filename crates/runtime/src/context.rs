//! Startup wiring: settings in, client out
//!
//! The entry point calls [`startup`] once and hands the resulting
//! [`AppContext`] to the command that needs it.

use crate::client::HueClient;
use crate::config::is_exempt;
use crate::error::HueError;
use crate::settings::{Settings, SettingsStore};

/// Everything a configured command needs to talk to the bridge
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Settings the client was built from
    pub settings: Settings,
    /// Authenticated bridge client
    pub client: HueClient,
}

impl AppContext {
    /// Build the authenticated client for `settings`
    pub fn new(settings: Settings) -> Result<Self, HueError> {
        let client = HueClient::new(&settings)?;
        Ok(Self { settings, client })
    }
}

/// Result of process startup for a given command
#[derive(Debug)]
pub enum Startup {
    /// Settings loaded and an authenticated client is ready
    Context(AppContext),
    /// The command runs without a client; settings may be empty
    Exempt(Settings),
}

/// Load settings for `command` and build the client when it needs one
///
/// Non-exempt commands without usable settings fail with
/// [`HueError::NotConfigured`] before any client is constructed.
pub fn startup(store: &SettingsStore, command: &str) -> Result<Startup, HueError> {
    let settings = store.load(command)?;

    if is_exempt(command) {
        return Ok(Startup::Exempt(settings));
    }

    tracing::debug!("Connecting to bridge at {}", settings.bridge);
    AppContext::new(settings).map(Startup::Context)
}
