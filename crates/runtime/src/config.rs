//! Centralized configuration for the OpenHue CLI
//!
//! This module provides a single source of truth for all configuration values
//! used throughout the application.
//!
//! # Environment Variables
//!
//! - `OPENHUE_CONFIG_DIR`: Override the settings directory (defaults to `~/.openhue`)

/// Name of the settings directory inside the user's home directory
pub const CONFIG_DIR_NAME: &str = ".openhue";

/// Name of the settings file inside the settings directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Environment variable name for overriding the settings directory
pub const CONFIG_DIR_ENV_VAR: &str = "OPENHUE_CONFIG_DIR";

/// Header carrying the application key on authenticated bridge requests
pub const APPLICATION_KEY_HEADER: &str = "hue-application-key";

/// Commands that may run before the CLI has been configured
pub const EXEMPT_COMMANDS: [&str; 4] = ["setup", "help", "discover", "auth"];

/// Default request timeout in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Public bridge discovery endpoint
pub const DISCOVERY_URL: &str = "https://discovery.meethue.com";

/// Device type announced to the bridge when pairing
pub const DEVICE_TYPE: &str = "openhue#cli";

/// Warning printed when a command needs settings that are not there
pub const NOT_CONFIGURED_MESSAGE: &str =
    "openhue-cli not configured yet, please run the 'setup' command";

/// Returns `true` if `command` may run without a loaded configuration
pub fn is_exempt(command: &str) -> bool {
    EXEMPT_COMMANDS.contains(&command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exempt_commands() {
        for command in ["setup", "help", "discover", "auth"] {
            assert!(is_exempt(command), "{command} should be exempt");
        }
    }

    #[test]
    fn test_non_exempt_commands() {
        assert!(!is_exempt("get"));
        assert!(!is_exempt("Setup"));
        assert!(!is_exempt(""));
    }
}
