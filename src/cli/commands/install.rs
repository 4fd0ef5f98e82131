//! Install command - install requirements into a packages layer

use crate::checksum::ChecksumCalculator;
use crate::cli::args::{InstallArgs, OutputFormat};
use crate::config::Config;
use crate::error::{PipInstallError, PipInstallResult};
use crate::install::PipInstallProcess;
use crate::process::TokioProcessRunner;
use std::sync::Arc;
use tracing::info;

/// Execute the install command
pub async fn execute(args: InstallArgs, config: &Config) -> PipInstallResult<()> {
    let working_dir = match args.working_dir {
        Some(dir) => dir,
        None => std::env::current_dir()
            .map_err(|e| PipInstallError::io("getting current directory", e))?,
    };

    let process = PipInstallProcess::new(
        Arc::new(TokioProcessRunner::new(&config.installer.program)),
        Arc::new(ChecksumCalculator::new()),
    );

    let checksum = process
        .execute(&working_dir, &args.packages_layer, &args.cache_layer)
        .await?;

    info!("Packages layer checksum: {}", checksum);

    match args.format {
        OutputFormat::Text => println!("{}", checksum),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "packages_layer": args.packages_layer,
                "checksum": checksum,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
