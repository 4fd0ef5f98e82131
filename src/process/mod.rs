//! Subprocess execution capability
//!
//! The install and site-packages processes never spawn programs themselves;
//! they describe an [`Execution`] and hand it to a [`ProcessRunner`]. The
//! runner is bound to one program (e.g. `pip` or `python`) at construction.

mod env;
mod runner;

pub use env::Environment;
pub use runner::TokioProcessRunner;

use crate::error::PipInstallResult;
use async_trait::async_trait;
use std::path::PathBuf;

/// Max number of output lines to include in error messages.
const ERROR_TAIL_LINES: usize = 50;

/// A single invocation of the runner's program
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Execution {
    /// Arguments passed after the program name
    pub args: Vec<String>,

    /// Working directory (inherits the caller's when `None`)
    pub dir: Option<PathBuf>,

    /// Full environment for the child
    pub env: Environment,
}

/// Abstract subprocess runner
///
/// Implementations run their program to completion and return the combined
/// stdout+stderr. A non-zero exit must surface as
/// [`PipInstallError::ProcessExit`](crate::error::PipInstallError::ProcessExit)
/// carrying the captured output.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run the program with the given invocation
    async fn execute(&self, execution: &Execution) -> PipInstallResult<String>;

    /// Program name used for display and error messages
    fn program(&self) -> &str;
}

/// Keep the useful tail of subprocess output for error diagnostics.
pub(crate) fn error_output(lines: &[String]) -> String {
    let start = lines.len().saturating_sub(ERROR_TAIL_LINES);
    lines[start..].join("\n")
}
