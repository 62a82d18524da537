//! YAMLDoc CLI entry point
//!
//! Parses command-line arguments, runs the selected command and turns any
//! error into a user-friendly message with a non-zero exit status.
//!
//! Commands:
//! - `validate` - Check the YAMLDoc blocks of YAML files
//! - `install` - Regenerate deployments from validated templates
//! - `list` - Show templates and deployments

use anyhow::Result;
use clap::Parser;
use yamldoc_cli::cli;
use yamldoc_cli::core::error::user_friendly_error;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Set up colored output for Windows
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    match cli.execute() {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
