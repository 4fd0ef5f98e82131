//! Site-packages command - resolve the user site directory for a layer

use crate::cli::args::{OutputFormat, SitePackagesArgs};
use crate::config::Config;
use crate::error::PipInstallResult;
use crate::process::TokioProcessRunner;
use crate::site::SiteProcess;
use std::sync::Arc;

/// Execute the site-packages command
pub async fn execute(args: SitePackagesArgs, config: &Config) -> PipInstallResult<()> {
    let process = SiteProcess::new(Arc::new(TokioProcessRunner::new(&config.runtime.program)));
    let site_packages = process.execute(&args.layer).await?;

    match args.format {
        OutputFormat::Text => println!("{}", site_packages),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "layer": args.layer,
                "site_packages": site_packages,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
