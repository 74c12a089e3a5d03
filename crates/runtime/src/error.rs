//! Error types for settings and bridge access

use std::path::PathBuf;

use crate::settings::ConfigState;

/// Errors raised while loading settings or talking to the bridge
#[derive(Debug, thiserror::Error)]
pub enum HueError {
    /// Neither `OPENHUE_CONFIG_DIR` nor a home directory is available
    #[error("Could not determine home directory")]
    HomeDirNotFound,

    /// A command that needs settings ran without usable ones
    #[error("OpenHue is not configured ({})", .state.describe())]
    NotConfigured {
        /// Why the settings could not be used
        state: ConfigState,
    },

    /// Reading or writing the settings directory failed
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        /// Path that was being accessed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Settings could not be written as YAML
    #[error("Failed to serialize settings: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The application key contains bytes not allowed in a header
    #[error("Application key is not a valid header value")]
    InvalidApplicationKey,

    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(#[source] reqwest::Error),

    /// Transport, TLS or decoding failure
    #[error("Request to the bridge failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The bridge answered with a non-success status
    #[error("Bridge returned {status}: {body}")]
    Status {
        /// HTTP status code
        status: reqwest::StatusCode,
        /// Response body, empty if unreadable
        body: String,
    },

    /// The bridge refused to issue an application key
    #[error("Pairing failed ({kind}): {description}")]
    Pairing {
        /// Bridge error type, `101` when the link button was not pressed
        kind: u32,
        /// Bridge error description
        description: String,
    },
}

impl HueError {
    /// Returns `true` if the error means the user still has to run `setup`
    pub const fn is_not_configured(&self) -> bool {
        matches!(self, Self::NotConfigured { .. })
    }
}
