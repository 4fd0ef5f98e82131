//! CLI command implementations

pub mod checksum;
pub mod config;
pub mod install;
pub mod site_packages;

pub use checksum::execute as checksum;
pub use config::execute as config;
pub use install::execute as install;
pub use site_packages::execute as site_packages;
