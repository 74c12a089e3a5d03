//! Settings file management for the OpenHue CLI
//!
//! Settings live in a flat YAML file, `~/.openhue/config.yaml`:
//!
//! ```yaml
//! bridge: 192.168.1.2
//! key: my-application-key
//! ```

use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::{CONFIG_DIR_ENV_VAR, CONFIG_DIR_NAME, CONFIG_FILE_NAME, is_exempt};
use crate::error::HueError;

/// Bridge host and application key read from the settings file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Host name or IP address of the Hue bridge
    #[serde(deserialize_with = "scalar_string")]
    pub bridge: String,
    /// Application key issued by the bridge during pairing
    #[serde(deserialize_with = "scalar_string")]
    pub key: String,
}

/// Accept string-like YAML scalars, so `key: 1234` still loads
///
/// Integers keep their digits. Floats are rejected because their text form
/// is not preserved (`1e3` would come back as `1000.0`).
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    use serde_yaml::Value;

    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        Value::Number(n) => Err(D::Error::custom(format!(
            "number {n} cannot be read back exactly, quote the value"
        ))),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(D::Error::custom(format!("expected a string, found {other:?}"))),
    }
}

/// Outcome of reading the settings file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigState {
    /// The file was read and parsed
    Ready(Settings),
    /// There is no settings file yet
    NotConfigured,
    /// The file exists but could not be read or parsed
    ParseError(String),
}

impl ConfigState {
    /// Short human readable description of the state
    pub fn describe(&self) -> String {
        match self {
            Self::Ready(_) => "ready".to_string(),
            Self::NotConfigured => "no settings file".to_string(),
            Self::ParseError(detail) => format!("invalid settings file: {detail}"),
        }
    }
}

/// Reads and writes the settings file in a given directory
#[derive(Debug, Clone)]
pub struct SettingsStore {
    dir: PathBuf,
}

impl SettingsStore {
    /// Store rooted at `OPENHUE_CONFIG_DIR`, or `~/.openhue` when unset
    pub fn from_env() -> Result<Self, HueError> {
        Self::resolve(std::env::var_os(CONFIG_DIR_ENV_VAR), dirs::home_dir())
    }

    /// Pick the settings directory from an override or the home directory
    pub fn resolve(
        override_dir: Option<OsString>,
        home: Option<PathBuf>,
    ) -> Result<Self, HueError> {
        if let Some(dir) = override_dir.filter(|d| !d.is_empty()) {
            return Ok(Self::with_dir(dir));
        }

        let home = home.ok_or(HueError::HomeDirNotFound)?;
        Ok(Self::with_dir(home.join(CONFIG_DIR_NAME)))
    }

    /// Store rooted at an explicit directory
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory holding the settings file
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the settings file
    pub fn config_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE_NAME)
    }

    /// Create the settings directory; failures are logged and ignored
    pub fn ensure_dir(&self) {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            tracing::debug!("Could not create {}: {}", self.dir.display(), e);
        }
    }

    /// Read the settings file and classify the result
    pub fn state(&self) -> ConfigState {
        self.ensure_dir();

        let path = self.config_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No settings file at {}", path.display());
                return ConfigState::NotConfigured;
            }
            Err(e) => return ConfigState::ParseError(e.to_string()),
        };

        // An empty document is valid YAML but carries no mapping
        if content.trim().is_empty() {
            return ConfigState::Ready(Settings::default());
        }

        match serde_yaml::from_str::<Settings>(&content) {
            Ok(settings) => ConfigState::Ready(settings),
            Err(e) => ConfigState::ParseError(e.to_string()),
        }
    }

    /// Load settings on behalf of `command`
    ///
    /// Exempt commands get empty settings when the file is missing or
    /// invalid; every other command gets [`HueError::NotConfigured`].
    pub fn load(&self, command: &str) -> Result<Settings, HueError> {
        match self.state() {
            ConfigState::Ready(settings) => Ok(settings),
            state if is_exempt(command) => {
                tracing::debug!("Running '{}' without settings: {}", command, state.describe());
                Ok(Settings::default())
            }
            state => Err(HueError::NotConfigured { state }),
        }
    }

    /// Write `settings` to the settings file
    pub fn save(&self, settings: &Settings) -> Result<(), HueError> {
        fs::create_dir_all(&self.dir).map_err(|source| HueError::Io {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.config_path();
        let content = serde_yaml::to_string(settings)?;
        fs::write(&path, content).map_err(|source| HueError::Io { path, source })?;

        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
