//! The pip install process
//!
//! Runs `pip install --user` with `PYTHONUSERBASE` pointed at the packages
//! layer, then checksums the layer so the caller can decide whether a cached
//! copy is still valid next build.

use crate::checksum::ContentFingerprinter;
use crate::error::{PipInstallError, PipInstallResult};
use crate::install::mode::{InstallMode, VENDOR_DIR};
use crate::process::{Environment, Execution, ProcessRunner};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// Variable that makes Python treat a directory as its user package base
pub const USER_BASE_ENV: &str = "PYTHONUSERBASE";

/// Installs requirements into a packages layer
pub struct PipInstallProcess {
    pip: Arc<dyn ProcessRunner>,
    summer: Arc<dyn ContentFingerprinter>,
}

impl PipInstallProcess {
    pub fn new(pip: Arc<dyn ProcessRunner>, summer: Arc<dyn ContentFingerprinter>) -> Self {
        Self { pip, summer }
    }

    /// Install `working_dir/requirements.txt` into `packages_layer`.
    ///
    /// Returns the checksum of `packages_layer` after a successful install.
    /// When checksumming fails, the error carries the calculator's own
    /// placeholder value (see [`PipInstallError::partial_checksum`]).
    pub async fn execute(
        &self,
        working_dir: &Path,
        packages_layer: &Path,
        cache_layer: &Path,
    ) -> PipInstallResult<String> {
        // pip runs inside working_dir, so every path it sees must be absolute
        let working_dir = absolute_path(working_dir)?;
        let packages_layer = absolute_path(packages_layer)?;
        let cache_layer = absolute_path(cache_layer)?;

        let vendor_present = vendor_dir_exists(&working_dir).await?;
        let mode = InstallMode::select(vendor_present, &working_dir, &cache_layer);

        if mode.is_vendored() {
            info!("Installing requirements from vendored packages");
        } else {
            info!("Installing requirements from the package index");
        }

        let execution = Execution {
            args: mode.args(),
            dir: Some(working_dir.clone()),
            env: Environment::inherit().with(USER_BASE_ENV, packages_layer.as_os_str()),
        };

        debug!(
            "Running '{} {}' in {}",
            self.pip.program(),
            execution.args.join(" "),
            working_dir.display()
        );

        self.pip
            .execute(&execution)
            .await
            .map_err(|e| PipInstallError::InstallFailed {
                output: e.captured_output().unwrap_or_default().to_string(),
                source: Box::new(e),
            })?;

        info!("Installation complete, computing layer checksum");
        self.summer.sum(&[packages_layer]).await
    }
}

/// Resolve `path` against the current directory without touching the filesystem
pub(crate) fn absolute_path(path: &Path) -> PipInstallResult<PathBuf> {
    std::path::absolute(path)
        .map_err(|e| PipInstallError::io(format!("resolving path {}", path.display()), e))
}

/// Whether `working_dir/vendor` exists.
///
/// Anything other than "not found" is an error, reported before pip runs.
async fn vendor_dir_exists(working_dir: &Path) -> PipInstallResult<bool> {
    let vendor_dir: PathBuf = working_dir.join(VENDOR_DIR);
    match tokio::fs::metadata(&vendor_dir).await {
        Ok(metadata) => Ok(metadata.is_dir()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(PipInstallError::VendorStat {
            path: vendor_dir,
            source: e,
        }),
    }
}
