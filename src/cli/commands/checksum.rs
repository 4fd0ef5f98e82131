//! Checksum command - print the content checksum of paths

use crate::checksum::{ChecksumCalculator, ContentFingerprinter};
use crate::cli::args::ChecksumArgs;
use crate::error::PipInstallResult;

/// Execute the checksum command
pub async fn execute(args: ChecksumArgs) -> PipInstallResult<()> {
    let checksum = ChecksumCalculator::new().sum(&args.paths).await?;
    println!("{}", checksum);
    Ok(())
}
