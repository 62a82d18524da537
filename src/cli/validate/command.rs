//! Command structure and output format definitions for validation.

use clap::Args;
use std::path::PathBuf;

/// Command to validate YAMLDoc files.
///
/// # Examples
///
/// ```rust,ignore
/// use yamldoc_cli::cli::validate::{OutputFormat, ValidateCommand};
///
/// let cmd = ValidateCommand {
///     files: vec!["config/app.example.yml".into()],
///     format: OutputFormat::Json,
///     strict: true,
/// };
/// cmd.execute()?;
/// ```
#[derive(Args, Debug)]
pub struct ValidateCommand {
    /// Files to validate
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Output format: text or json
    ///
    /// - `text`: findings and a summary line per file
    /// - `json`: a single object suitable for automation
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Strict mode (treat warnings as errors)
    ///
    /// A file with over-long docblock lines fails validation.
    #[arg(long)]
    pub strict: bool,
}

/// Output format for command results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colored markers.
    Text,

    /// Structured JSON on stdout.
    Json,
}
