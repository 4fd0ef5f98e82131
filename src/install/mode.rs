//! Install mode selection and pip argument construction
//!
//! A project either ships a `vendor/` directory of pre-fetched archives, in
//! which case pip must resolve offline from it, or it doesn't and pip talks to
//! the index with a persistent download cache.

use std::path::{Path, PathBuf};

/// Requirements file passed to pip, relative to the working directory
pub const REQUIREMENTS_FILE: &str = "requirements.txt";

/// Name of the pre-fetched archives directory under the working directory
pub const VENDOR_DIR: &str = "vendor";

/// Flags appended to every invocation, in order
const TRAILING_FLAGS: &[&str] = &["--compile", "--user", "--disable-pip-version-check"];

/// How pip resolves packages for this build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallMode {
    /// Install exclusively from local archives, never contacting an index
    Vendored { vendor_dir: PathBuf },

    /// Resolve from the index, keeping downloads in the cache layer
    Network { cache_dir: PathBuf },
}

impl InstallMode {
    /// Pick the mode from whether `working_dir/vendor` exists
    pub fn select(vendor_present: bool, working_dir: &Path, cache_layer: &Path) -> Self {
        if vendor_present {
            Self::Vendored {
                vendor_dir: working_dir.join(VENDOR_DIR),
            }
        } else {
            Self::Network {
                cache_dir: cache_layer.to_path_buf(),
            }
        }
    }

    /// Full pip argument list for this mode
    pub fn args(&self) -> Vec<String> {
        let mut args: Vec<String> = match self {
            Self::Vendored { vendor_dir } => vec![
                "install".to_string(),
                "--requirement".to_string(),
                REQUIREMENTS_FILE.to_string(),
                "--ignore-installed".to_string(),
                "--exists-action=w".to_string(),
                "--no-index".to_string(),
                format!("--find-links={}", vendor_dir.display()),
            ],
            Self::Network { cache_dir } => vec![
                "install".to_string(),
                "--requirement".to_string(),
                REQUIREMENTS_FILE.to_string(),
                "--exists-action=w".to_string(),
                format!("--cache-dir={}", cache_dir.display()),
            ],
        };

        args.extend(TRAILING_FLAGS.iter().map(|flag| flag.to_string()));
        args
    }

    pub fn is_vendored(&self) -> bool {
        matches!(self, Self::Vendored { .. })
    }
}
