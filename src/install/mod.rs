//! Requirements installation into a packages layer

pub mod mode;
pub mod process;

pub use mode::{InstallMode, REQUIREMENTS_FILE, VENDOR_DIR};
pub use process::{PipInstallProcess, USER_BASE_ENV};
