//! Error types for pip-install
//!
//! All modules use `PipInstallResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pip-install operations
pub type PipInstallResult<T> = Result<T, PipInstallError>;

/// All errors that can occur in pip-install
#[derive(Error, Debug)]
pub enum PipInstallError {
    // Workspace errors
    #[error("failed to stat vendor directory {path}: {source}")]
    VendorStat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Installer errors
    #[error("pip install failed:\n{output}\nerror: {source}")]
    InstallFailed {
        output: String,
        #[source]
        source: Box<PipInstallError>,
    },

    #[error("failed to locate site packages:\n{output}\nerror: {source}")]
    SitePackagesLookup {
        output: String,
        #[source]
        source: Box<PipInstallError>,
    },

    // Checksum errors
    #[error("{reason}")]
    Checksum { partial: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // IO errors
    #[error("IO error: {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with status {}", .code.map_or_else(|| "signal".to_string(), |c| c.to_string()))]
    ProcessExit {
        command: String,
        code: Option<i32>,
        output: String,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PipInstallError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Create a checksum error carrying the digest the calculator produced
    pub fn checksum(partial: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Checksum {
            partial: partial.into(),
            reason: reason.into(),
        }
    }

    /// Output captured from the subprocess, if this error came from one
    pub fn captured_output(&self) -> Option<&str> {
        match self {
            Self::ProcessExit { output, .. }
            | Self::InstallFailed { output, .. }
            | Self::SitePackagesLookup { output, .. } => Some(output),
            _ => None,
        }
    }

    /// The checksum value reported alongside this error.
    ///
    /// Checksum failures carry whatever the calculator yielded; every other
    /// failure reports an empty value.
    pub fn partial_checksum(&self) -> &str {
        match self {
            Self::Checksum { partial, .. } => partial,
            _ => "",
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::CommandFailed { .. } => {
                Some("Check that the program is on PATH or set it with --pip / --python")
            }
            Self::VendorStat { .. } => Some("Check permissions on the working directory"),
            Self::ConfigInvalid { .. } => Some("Run: pip-install config show"),
            Self::InstallFailed { source, .. } | Self::SitePackagesLookup { source, .. } => {
                source.hint()
            }
            _ => None,
        }
    }
}
