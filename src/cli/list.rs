//! List YAMLDoc templates and deployments.
//!
//! # Examples
//!
//! ```bash
//! yamldoc list
//! yamldoc list config --format json
//! ```
//!
//! Text output:
//!
//! ```text
//! Templates:
//!   config/app.example.yml ✓ installed -> config/app.yml
//!   config/db.example.yml  ✗ not installed
//! Deployments:
//!   config/app.yml
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::yamlfile;

use super::validate::OutputFormat;

/// Command to list templates and deployments.
#[derive(Args, Debug)]
pub struct ListCommand {
    /// Directory to search
    #[arg(value_name = "PATH", default_value = ".")]
    pub path: PathBuf,

    /// Output format: text or json
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Everything found beneath a directory.
#[derive(Debug, Default, Serialize)]
pub struct Listing {
    pub templates: Vec<TemplateEntry>,
    pub deployments: Vec<String>,
}

/// A template and the state of its deployment.
#[derive(Debug, Serialize)]
pub struct TemplateEntry {
    pub path: String,
    /// Deployment path the template installs to
    pub deployment: Option<String>,
    pub installed: bool,
}

impl ListCommand {
    pub fn execute(self) -> Result<()> {
        let listing = collect(&self.path)?;
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&listing)?),
            OutputFormat::Text => print_text(&listing),
        }
        Ok(())
    }
}

/// Scans `dir` for templates and deployments.
pub fn collect(dir: &Path) -> Result<Listing> {
    let templates = yamlfile::find_templates(dir)?
        .into_iter()
        .map(|template| {
            let deployment = yamlfile::associated_filename(&template.to_string_lossy()).ok();
            TemplateEntry {
                installed: yamlfile::is_installed(&template),
                path: template.display().to_string(),
                deployment,
            }
        })
        .collect();

    let deployments =
        yamlfile::find_deploys(dir)?.iter().map(|deployment| deployment.display().to_string()).collect();

    Ok(Listing {
        templates,
        deployments,
    })
}

fn print_text(listing: &Listing) {
    if listing.templates.is_empty() && listing.deployments.is_empty() {
        println!("No YAML templates or deployments found");
        return;
    }

    let width = listing.templates.iter().map(|entry| entry.path.chars().count()).max().unwrap_or(0);

    println!("{}", "Templates:".bold());
    for entry in &listing.templates {
        let status = match (&entry.deployment, entry.installed) {
            (Some(deployment), true) => format!("{} installed -> {deployment}", "✓".green()),
            _ => format!("{} not installed", "✗".yellow()),
        };
        println!("  {:<width$} {status}", entry.path);
    }

    println!("{}", "Deployments:".bold());
    for deployment in &listing.deployments {
        println!("  {deployment}");
    }
}
