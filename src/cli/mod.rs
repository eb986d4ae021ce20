// CLI module for command-line interface

pub mod zip;

use clap::Parser;

use crate::models::report::ZipReport;
use crate::utils::error::Result;

use self::zip::ZipCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "bootzip")]
#[command(about = "Zip bootanimation folders in store-only mode (no compression)")]
#[command(long_about = r#"Find bootanimation folders in a directory and zip each one into an
uncompressed archive next to it (bootanimation01/ -> bootanimation01.zip).

Matched folder names are "bootanimation" optionally followed by digits, in
any case. Folders are processed bare name first, then by numeric suffix.
Each folder must have 'part0/' and 'desc.txt' to be processed.

Examples:
  bootzip ./animations                  Zip every valid folder
  bootzip ./animations --reproducible   Fixed entry timestamps
  bootzip ./animations --json           Machine-readable report
  bootzip -vv ./animations              Debug logging on stderr"#)]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub command: ZipCommand,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute the parsed command line
    pub fn execute(cli: &Cli) -> Result<ZipReport> {
        cli.command.run()
    }
}
