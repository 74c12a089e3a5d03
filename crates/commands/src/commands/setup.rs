//! Setup command: write the bridge address and application key to disk

use std::sync::Arc;

use anyhow::{Context, Result};

use openhue_runtime::deps::{MessageStyle, UserInterface};
use openhue_runtime::{HueClient, Settings, SettingsStore};

use super::auth;

/// Setup command arguments (matches CLI parser)
#[derive(Debug, Clone)]
pub struct SetupArgs {
    /// Bridge host or IP address
    pub bridge: String,
    /// Existing application key; a new one is requested when absent
    pub key: Option<String>,
}

/// Dependencies for the setup command
pub struct SetupDependencies {
    /// User interface for output
    pub ui: Arc<dyn UserInterface>,
    /// Where the settings file is written
    pub store: SettingsStore,
    /// Client used for pairing when no key was given
    pub client: HueClient,
}

/// Execute the setup command with injected dependencies
pub async fn execute_with_deps(args: SetupArgs, deps: &SetupDependencies) -> Result<Settings> {
    deps.ui
        .print_styled("→ Configuring openhue-cli", MessageStyle::Cyan);

    let key = match args.key {
        Some(key) => key,
        None => {
            let auth_deps = auth::AuthDependencies {
                ui: deps.ui.clone(),
                client: deps.client.clone(),
            };
            auth::execute_with_deps(&auth_deps).await?.key
        }
    };

    let settings = Settings {
        bridge: args.bridge,
        key,
    };
    deps.store
        .save(&settings)
        .context("Failed to write settings")?;
    tracing::debug!("Saved settings for bridge {}", settings.bridge);

    deps.ui.print("");
    deps.ui.print_styled(
        &format!(
            "✓ Settings written to {}",
            deps.store.config_path().display()
        ),
        MessageStyle::Success,
    );

    Ok(settings)
}

/// Execute the setup command with default dependencies
pub async fn execute(args: SetupArgs, store: SettingsStore) -> Result<()> {
    use crate::ui::RealUserInterface;

    let deps = SetupDependencies {
        ui: Arc::new(RealUserInterface),
        client: HueClient::no_auth(&args.bridge)?,
        store,
    };

    execute_with_deps(args, &deps).await.map(|_| ())
}
