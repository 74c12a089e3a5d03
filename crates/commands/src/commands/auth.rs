//! Pairing with a Hue bridge
//!
//! The bridge only hands out an application key for a short while after its
//! link button has been pressed.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use openhue_runtime::config::DEVICE_TYPE;
use openhue_runtime::deps::{MessageStyle, UserInterface};
use openhue_runtime::{HueClient, HueError};

/// Error type reported by the bridge when the link button was not pressed
pub const LINK_BUTTON_NOT_PRESSED: u32 = 101;

#[derive(Debug, Serialize)]
struct PairingRequest<'a> {
    devicetype: &'a str,
    generateclientkey: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum PairingResponse {
    Success(PairingSuccess),
    Error(PairingFailure),
}

#[derive(Debug, Deserialize)]
struct PairingSuccess {
    username: String,
    #[serde(default)]
    clientkey: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PairingFailure {
    #[serde(rename = "type")]
    kind: u32,
    description: String,
}

/// Credentials issued by the bridge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedKey {
    /// Application key sent as `hue-application-key`
    pub key: String,
    /// Entertainment streaming key, when the bridge returns one
    pub client_key: Option<String>,
}

/// Ask the bridge for a new application key
pub async fn request_key(client: &HueClient) -> Result<PairedKey, HueError> {
    let request = PairingRequest {
        devicetype: DEVICE_TYPE,
        generateclientkey: true,
    };
    let responses: Vec<PairingResponse> = client.post_json("/api", &request).await?;

    match responses.into_iter().next() {
        Some(PairingResponse::Success(success)) => Ok(PairedKey {
            key: success.username,
            client_key: success.clientkey,
        }),
        Some(PairingResponse::Error(failure)) => Err(HueError::Pairing {
            kind: failure.kind,
            description: failure.description,
        }),
        None => Err(HueError::Pairing {
            kind: 0,
            description: "bridge returned an empty response".to_string(),
        }),
    }
}

/// Auth command arguments (matches CLI parser)
#[derive(Debug, Clone)]
pub struct AuthArgs {
    /// Bridge host or IP address
    pub bridge: String,
}

/// Dependencies for the auth command
pub struct AuthDependencies {
    /// User interface for output
    pub ui: Arc<dyn UserInterface>,
    /// Client for the bridge, without an application key
    pub client: HueClient,
}

/// Execute the auth command with injected dependencies
pub async fn execute_with_deps(deps: &AuthDependencies) -> Result<PairedKey> {
    deps.ui.print_styled(
        &format!("→ Pairing with bridge at {}", deps.client.base_url()),
        MessageStyle::Cyan,
    );

    let paired = match request_key(&deps.client).await {
        Ok(paired) => paired,
        Err(HueError::Pairing { kind, description }) if kind == LINK_BUTTON_NOT_PRESSED => {
            deps.ui.print_styled(
                "Press the link button on the bridge, then run the command again",
                MessageStyle::Warning,
            );
            return Err(HueError::Pairing { kind, description }.into());
        }
        Err(e) => return Err(e).context("Failed to pair with the bridge"),
    };

    deps.ui
        .print_styled("✓ Application key created", MessageStyle::Success);
    deps.ui.print(&format!("Key: {}", paired.key));
    if let Some(client_key) = &paired.client_key {
        deps.ui.print(&format!("Client key: {client_key}"));
    }

    Ok(paired)
}

/// Execute the auth command with default dependencies
pub async fn execute(args: AuthArgs) -> Result<()> {
    use crate::ui::RealUserInterface;

    let deps = AuthDependencies {
        ui: Arc::new(RealUserInterface),
        client: HueClient::no_auth(&args.bridge)?,
    };

    execute_with_deps(&deps).await.map(|_| ())
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
