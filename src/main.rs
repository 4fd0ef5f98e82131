//! pip-install CLI entry point
//!
//! Wires the tokio process runner and checksum calculator into the install
//! and site-packages processes.

use clap::Parser;
use console::style;
use pip_install::cli::{Cli, Commands};
use pip_install::config::{Config, ConfigManager};
use pip_install::error::PipInstallResult;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> PipInstallResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let mut config = config_manager.load().await?;

    init_logging(cli.verbose, &config);
    debug!("Using config {}", config_manager.path().display());

    apply_overrides(&mut config, &cli);

    match cli.command {
        Commands::Install(args) => pip_install::cli::commands::install(args, &config).await,
        Commands::SitePackages(args) => {
            pip_install::cli::commands::site_packages(args, &config).await
        }
        Commands::Checksum(args) => pip_install::cli::commands::checksum(args).await,
        Commands::Config(args) => {
            pip_install::cli::commands::config(args, &config, &config_manager).await
        }
    }
}

/// Initialize logging: 0 = warn, 1 = info, 2+ = debug
fn init_logging(verbose: u8, config: &Config) {
    let filter = match verbose {
        0 => EnvFilter::new("pip_install=warn"),
        1 => EnvFilter::new("pip_install=info"),
        _ => EnvFilter::new("pip_install=debug"),
    };

    // Logs go to stderr so stdout stays machine-readable
    if config.json_logs() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .init();
    }
}

fn apply_overrides(config: &mut Config, cli: &Cli) {
    if let Some(ref pip) = cli.pip {
        config.installer.program = pip.clone();
    }
    if let Some(ref python) = cli.python {
        config.runtime.program = python.clone();
    }
}
