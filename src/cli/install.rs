//! Regenerate deployments from YAMLDoc templates.
//!
//! Each template is parsed and validated; only a template that validates is
//! written to its deployment path, overwriting whatever was there. With no
//! templates named, every template beneath `--path` is installed.
//!
//! # Examples
//!
//! ```bash
//! yamldoc install config/app.example.yml
//! yamldoc install --path config
//! ```

use anyhow::{Result, bail};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::validator::Validator;
use crate::yamlfile::{self, InstallOutcome};

/// Command to install templates as deployments.
#[derive(Args, Debug)]
pub struct InstallCommand {
    /// Templates to install (defaults to every template beneath --path)
    #[arg(value_name = "TEMPLATE")]
    pub templates: Vec<PathBuf>,

    /// Directory searched for templates when none are named
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}

impl InstallCommand {
    /// Installs every selected template and reports one line per template.
    ///
    /// # Errors
    ///
    /// Returns an error when the search directory cannot be read or when any
    /// template fails to install.
    pub fn execute(self) -> Result<()> {
        let templates = self.selected_templates()?;
        if templates.is_empty() {
            println!("No templates found beneath {}", self.path.display());
            return Ok(());
        }

        let validator = Validator::default();
        let mut failed = 0;

        for template in &templates {
            if !report(template, yamlfile::install(template, &validator)) {
                failed += 1;
            }
        }

        if failed > 0 {
            bail!("{failed} of {} template(s) failed to install", templates.len());
        }
        Ok(())
    }

    /// The named templates, or every template beneath `path`.
    pub fn selected_templates(&self) -> Result<Vec<PathBuf>> {
        if self.templates.is_empty() {
            yamlfile::find_templates(&self.path)
        } else {
            Ok(self.templates.clone())
        }
    }
}

/// Prints the outcome of one install and returns whether it succeeded.
fn report(template: &Path, outcome: Result<InstallOutcome>) -> bool {
    let template = template.display();
    match outcome {
        Ok(InstallOutcome::Installed(target)) => {
            println!("{} Installed {template} -> {}", "✓".green(), target.display());
            true
        }
        Ok(InstallOutcome::Missing) => {
            println!("{} Template {template} does not exist", "✗".red());
            false
        }
        Ok(InstallOutcome::NotATemplate) => {
            println!("{} {template} is not a template", "✗".red());
            false
        }
        Ok(InstallOutcome::Invalid) => {
            println!("{} {template} failed validation, not installed", "✗".red());
            false
        }
        Err(e) => {
            println!("{} Failed to install {template}: {e:#}", "✗".red());
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const TEMPLATE: &str = "# Name of the application\nappname: demo\n";

    #[test]
    fn test_installs_named_template() {
        let dir = TempDir::new().unwrap();
        let template = dir.path().join("app.example.yml");
        std::fs::write(&template, TEMPLATE).unwrap();

        let cmd = InstallCommand {
            templates: vec![template],
            path: PathBuf::from("."),
        };
        cmd.execute().unwrap();

        let deployment = std::fs::read_to_string(dir.path().join("app.yml")).unwrap();
        assert_eq!(deployment, "---\n# Name of the application\nappname: demo\n");
    }

    #[test]
    fn test_installs_every_template_beneath_path() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("a.example.yml"), TEMPLATE).unwrap();
        std::fs::write(dir.path().join("nested/b.example.yml"), TEMPLATE).unwrap();

        let cmd = InstallCommand {
            templates: vec![],
            path: dir.path().to_path_buf(),
        };
        assert_eq!(cmd.selected_templates().unwrap().len(), 2);
        cmd.execute().unwrap();

        assert!(dir.path().join("a.yml").exists());
        assert!(dir.path().join("nested/b.yml").exists());
    }

    #[test]
    fn test_failure_is_an_error() {
        let dir = TempDir::new().unwrap();
        let good = dir.path().join("good.example.yml");
        let bad = dir.path().join("bad.example.yml");
        std::fs::write(&good, TEMPLATE).unwrap();
        std::fs::write(&bad, "undocumented: true\n").unwrap();

        let cmd = InstallCommand {
            templates: vec![bad, good],
            path: PathBuf::from("."),
        };
        assert!(cmd.execute().is_err());

        assert!(!dir.path().join("bad.yml").exists());
        assert!(dir.path().join("good.yml").exists());
    }

    #[test]
    fn test_no_templates_found() {
        let dir = TempDir::new().unwrap();
        let cmd = InstallCommand {
            templates: vec![],
            path: dir.path().to_path_buf(),
        };
        assert!(cmd.execute().is_ok());
    }

    #[test]
    fn test_report_outcomes() {
        let path = Path::new("app.example.yml");
        assert!(report(path, Ok(InstallOutcome::Installed(PathBuf::from("app.yml")))));
        assert!(!report(path, Ok(InstallOutcome::Missing)));
        assert!(!report(path, Ok(InstallOutcome::NotATemplate)));
        assert!(!report(path, Ok(InstallOutcome::Invalid)));
        assert!(!report(path, Err(anyhow::anyhow!("boom"))));
    }
}
