//! Command-line interface for YAMLDoc.
//!
//! The binary exposes three commands:
//!
//! - `validate`: parse templates and report docblock findings
//! - `install`: regenerate deployments from validated templates
//! - `list`: show templates (with install status) and deployments
//!
//! Global flags (`--verbose`, `--quiet`, `--no-color`) are turned into a
//! [`CliConfig`] which is applied once before the command runs, so tests can
//! inject configuration without touching process-wide state first.
//!
//! # Examples
//!
//! ```bash
//! yamldoc validate config/app.example.yml
//! yamldoc validate --format json --strict config/*.example.yml
//! yamldoc install --path config
//! yamldoc --no-color list
//! ```

mod install;
mod list;
pub mod validate;


use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

pub use install::InstallCommand;
pub use list::ListCommand;
pub use validate::{OutputFormat, ValidateCommand};

/// Runtime configuration for CLI execution.
///
/// Built from the global flags by [`Cli::build_config`] and applied by
/// [`Cli::execute_with_config`].
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter used when `RUST_LOG` is unset (`"debug"`, `"error"`, ...).
    ///
    /// `None` falls back to `"warn"`.
    pub log_level: Option<String>,

    /// Disable colored output.
    pub no_color: bool,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    #[must_use]
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// The filter directive diagnostics are logged with.
    ///
    /// `RUST_LOG` wins over the configured level.
    pub fn log_filter(&self) -> EnvFilter {
        if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(self.log_level.as_deref().unwrap_or("warn"))
        }
    }

    /// Installs the stderr log subscriber and the color override.
    ///
    /// Safe to call more than once; only the first subscriber is installed.
    pub fn apply(&self) {
        if self.no_color {
            colored::control::set_override(false);
        }

        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.log_filter())
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .with_ansi(!self.no_color)
            .try_init();
    }
}

/// Document, validate and regenerate YAML configuration templates.
#[derive(Parser)]
#[command(
    name = "yamldoc",
    about = "Document, validate and install YAML configuration templates",
    version,
    long_about = "YAMLDoc attaches comment blocks to every top-level key of a YAML template, \
                  validates them, and regenerates deployment files from validated templates."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show debug diagnostics on stderr
    ///
    /// Equivalent to `RUST_LOG=debug`. Mutually exclusive with `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the YAMLDoc blocks of one or more files.
    ///
    /// See [`ValidateCommand`] for options.
    Validate(ValidateCommand),

    /// Regenerate deployments from templates.
    ///
    /// See [`InstallCommand`] for options.
    Install(InstallCommand),

    /// List templates and deployments beneath a directory.
    ///
    /// See [`ListCommand`] for options.
    List(ListCommand),
}

impl Cli {
    /// Runs the parsed command with configuration taken from the global flags.
    pub fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config)
    }

    /// Translates the global flags into a [`CliConfig`].
    ///
    /// ```rust
    /// use clap::Parser;
    /// use yamldoc_cli::cli::Cli;
    ///
    /// let cli = Cli::parse_from(["yamldoc", "--verbose", "list"]);
    /// assert_eq!(cli.build_config().log_level.as_deref(), Some("debug"));
    /// ```
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            Some("error".to_string())
        } else {
            None
        };

        CliConfig {
            log_level,
            no_color: self.no_color,
        }
    }

    /// Applies `config` and dispatches to the subcommand.
    pub fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.apply();
        tracing::debug!("Running with {config:?}");

        match self.command {
            Commands::Validate(cmd) => cmd.execute(),
            Commands::Install(cmd) => cmd.execute(),
            Commands::List(cmd) => cmd.execute(),
        }
    }
}
