//! pip-install - Python dependency layer installer
//!
//! Installs a project's `requirements.txt` into an isolated packages layer
//! with pip, fingerprints the result for cache validation, and resolves the
//! interpreter's user site-packages directory for a layer.

pub mod checksum;
pub mod cli;
pub mod config;
pub mod error;
pub mod install;
pub mod process;
pub mod site;

#[cfg(test)]
pub(crate) mod fakes;

pub use checksum::{ChecksumCalculator, ContentFingerprinter};
pub use error::{PipInstallError, PipInstallResult};
pub use install::{InstallMode, PipInstallProcess};
pub use process::{Environment, Execution, ProcessRunner, TokioProcessRunner};
pub use site::SiteProcess;
