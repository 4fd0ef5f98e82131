//! Content fingerprinting for cache validity
//!
//! The install process fingerprints the packages layer after pip finishes so
//! a build pipeline can compare it against the value stored with a cached
//! layer. Same contents = same checksum, regardless of traversal order.

use crate::error::{PipInstallError, PipInstallResult};
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Computes a stable digest over the contents of one or more paths
#[async_trait]
pub trait ContentFingerprinter: Send + Sync {
    /// Digest the given paths.
    ///
    /// On failure, the returned [`PipInstallError::Checksum`] carries whatever
    /// value the implementation produced before failing.
    async fn sum(&self, paths: &[PathBuf]) -> PipInstallResult<String>;
}

/// SHA-256 checksum over files and directory trees
#[derive(Debug, Clone, Copy, Default)]
pub struct ChecksumCalculator;

impl ChecksumCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Blocking implementation of [`ContentFingerprinter::sum`]
    pub fn sum_blocking(paths: &[PathBuf]) -> PipInstallResult<String> {
        let mut hasher = Sha256::new();

        for path in paths {
            hash_path(&mut hasher, path).map_err(|e| PipInstallError::checksum("", e))?;
        }

        Ok(hex::encode(hasher.finalize()))
    }
}

#[async_trait]
impl ContentFingerprinter for ChecksumCalculator {
    async fn sum(&self, paths: &[PathBuf]) -> PipInstallResult<String> {
        let paths = paths.to_vec();
        tokio::task::spawn_blocking(move || Self::sum_blocking(&paths))
            .await
            .map_err(|e| PipInstallError::checksum("", format!("checksum task failed: {}", e)))?
    }
}

/// Feed one path into the running digest.
///
/// Directory entries are visited sorted by file name; each file contributes
/// its path relative to `root` followed by the digest of its contents, each
/// symlink its relative path and link target. Directories themselves only
/// contribute through their entries, so empty directories do not change the
/// checksum; special files (sockets, FIFOs, devices) are skipped.
fn hash_path(hasher: &mut Sha256, root: &Path) -> Result<(), String> {
    let mut count = 0usize;

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry.map_err(|e| format!("failed to walk {}: {}", root.display(), e))?;
        let file_type = entry.file_type();
        // Sockets and FIFOs have no stable content and may block on open
        if !file_type.is_file() && !file_type.is_symlink() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|_| entry.path());
        hasher.update(relative.to_string_lossy().as_bytes());
        hasher.update([0u8]);

        if file_type.is_symlink() {
            let target = fs::read_link(entry.path())
                .map_err(|e| format!("failed to read link {}: {}", entry.path().display(), e))?;
            hasher.update(b"link:");
            hasher.update(target.to_string_lossy().as_bytes());
        } else {
            hasher.update(hash_file_contents(entry.path())?);
        }
        hasher.update([0u8]);
        count += 1;
    }

    debug!("Checksummed {} entries under {}", count, root.display());
    Ok(())
}

/// SHA-256 of a single file's contents
fn hash_file_contents(path: &Path) -> Result<Vec<u8>, String> {
    let mut file = fs::File::open(path)
        .map_err(|e| format!("failed to open {}: {}", path.display(), e))?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    Ok(hasher.finalize().to_vec())
}
