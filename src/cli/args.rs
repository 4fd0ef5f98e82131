//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// pip-install - Python dependency layer installer
///
/// Installs a project's requirements into a cacheable packages layer and
/// reports a checksum of the result.
#[derive(Parser, Debug)]
#[command(name = "pip-install")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "PIP_INSTALL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Installer program (overrides installer.program)
    #[arg(long, global = true, env = "PIP_INSTALL_PIP")]
    pub pip: Option<String>,

    /// Python interpreter (overrides runtime.program)
    #[arg(long, global = true, env = "PIP_INSTALL_PYTHON")]
    pub python: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install requirements.txt into a packages layer
    Install(InstallArgs),

    /// Print the user site-packages directory for a layer
    SitePackages(SitePackagesArgs),

    /// Print the content checksum of files or directories
    Checksum(ChecksumArgs),

    /// Show configuration
    Config(ConfigArgs),
}

/// Output format for command results
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Bare value on stdout
    #[default]
    Text,
    /// JSON object on stdout
    Json,
}

/// Arguments for the install command
#[derive(Parser, Debug)]
pub struct InstallArgs {
    /// Project directory containing requirements.txt (defaults to current directory)
    #[arg(short, long)]
    pub working_dir: Option<PathBuf>,

    /// Layer that becomes PYTHONUSERBASE
    #[arg(long)]
    pub packages_layer: PathBuf,

    /// Layer used as pip's download cache
    #[arg(long)]
    pub cache_layer: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the site-packages command
#[derive(Parser, Debug)]
pub struct SitePackagesArgs {
    /// Packages layer to resolve
    #[arg(short, long)]
    pub layer: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the checksum command
#[derive(Parser, Debug)]
pub struct ChecksumArgs {
    /// Files or directories to checksum, in order
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
