//! Configuration schema for pip-install
//!
//! Configuration is stored at `~/.config/pip-install/config.toml`

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Package installer settings
    pub installer: InstallerConfig,

    /// Python runtime settings
    pub runtime: RuntimeConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// Installer (pip) settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct InstallerConfig {
    /// Program invoked for `pip install`
    pub program: String,
}

impl Default for InstallerConfig {
    fn default() -> Self {
        Self {
            program: "pip".to_string(),
        }
    }
}

/// Python runtime settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Interpreter queried for the user site directory
    pub program: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            program: "python".to_string(),
        }
    }
}

impl Config {
    /// Whether logs should be emitted as JSON
    pub fn json_logs(&self) -> bool {
        self.general.log_format.eq_ignore_ascii_case("json")
    }
}
