//! Site-packages resolution
//!
//! Where `pip install --user` puts packages beneath `PYTHONUSERBASE` depends
//! on the interpreter version and platform (`lib/python3.12/site-packages`,
//! `Python312/site-packages`, ...), so we ask the interpreter itself.

use crate::error::{PipInstallError, PipInstallResult};
use crate::install::process::absolute_path;
use crate::install::USER_BASE_ENV;
use crate::process::{Environment, Execution, ProcessRunner};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Resolves the user site-packages directory for a layer
pub struct SiteProcess {
    python: Arc<dyn ProcessRunner>,
}

impl SiteProcess {
    pub fn new(python: Arc<dyn ProcessRunner>) -> Self {
        Self { python }
    }

    /// Ask the interpreter for its user site directory under `layer_path`
    pub async fn execute(&self, layer_path: &Path) -> PipInstallResult<String> {
        let layer_path = absolute_path(layer_path)?;
        let execution = Execution {
            args: vec![
                "-m".to_string(),
                "site".to_string(),
                "--user-site".to_string(),
            ],
            dir: None,
            env: Environment::inherit().with(USER_BASE_ENV, layer_path.as_os_str()),
        };

        let output = self.python.execute(&execution).await.map_err(|e| {
            PipInstallError::SitePackagesLookup {
                output: e.captured_output().unwrap_or_default().to_string(),
                source: Box::new(e),
            }
        })?;

        let site_packages = output.trim().to_string();
        debug!("Site packages for {}: {}", layer_path.display(), site_packages);
        Ok(site_packages)
    }
}
