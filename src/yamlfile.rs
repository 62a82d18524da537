//! Template and deployment files on disk.
//!
//! A *template* is a documented YAML file whose name contains `example.yml`
//! (`config/app.example.yml`, `settings.example.yml.erb`). Its *deployment* is
//! the same name without `.example` (`config/app.yml`). Installing a template
//! rebuilds the deployment from the parsed and validated template rather than
//! copying it, so any difference between the two points at a parser defect.
//!
//! # Examples
//!
//! ```rust
//! use yamldoc_cli::yamlfile::{associated_filename, is_deployment, is_template};
//!
//! assert!(is_template("config/app.example.yml"));
//! assert!(is_deployment("config/app.yml"));
//! assert_eq!(associated_filename("config/app.example.yml").unwrap(), "config/app.yml");
//! assert_eq!(associated_filename("config/app.yml").unwrap(), "config/app.example.yml");
//! assert!(associated_filename("/usr/bin/fortune").is_err());
//! ```

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};
use walkdir::WalkDir;

use crate::constants::{TEMPLATE_INFIX, TEMPLATE_MARKER, YAML_MARKER};
use crate::core::YamlDocError;
use crate::document::Document;
use crate::parser::Parser;
use crate::utils::atomic_write;
use crate::validator::Validator;

/// Whether `filename` names a template.
pub fn is_template(filename: &str) -> bool {
    filename.contains(TEMPLATE_MARKER)
}

/// Whether `filename` names a deployment, i.e. a YAML file that is not a template.
pub fn is_deployment(filename: &str) -> bool {
    filename.contains(YAML_MARKER) && !filename.contains(TEMPLATE_MARKER)
}

/// The name of the file paired with `filename`.
///
/// Templates map to their deployment by dropping the first `.example`.
/// Anything else maps to a template by turning the first `.yml` into
/// `.example.yml`.
///
/// # Errors
///
/// [`YamlDocError::InvalidFilename`] when `filename` is neither a template nor
/// a YAML file.
pub fn associated_filename(filename: &str) -> Result<String, YamlDocError> {
    if is_template(filename) {
        return Ok(filename.replacen(TEMPLATE_INFIX, "", 1));
    }

    let associated = filename.replacen(YAML_MARKER, &format!("{TEMPLATE_INFIX}{YAML_MARKER}"), 1);
    if is_template(&associated) {
        Ok(associated)
    } else {
        Err(YamlDocError::InvalidFilename {
            filename: filename.to_string(),
        })
    }
}

/// The associated file of `path`, if it exists on disk.
pub fn find_associated(path: &Path) -> Result<Option<PathBuf>, YamlDocError> {
    let associated = PathBuf::from(associated_filename(&path.to_string_lossy())?);
    Ok(associated.exists().then_some(associated))
}

/// Whether `path` is a template whose deployment exists.
pub fn is_installed(path: &Path) -> bool {
    is_template(&path.to_string_lossy()) && matches!(find_associated(path), Ok(Some(_)))
}

/// Template files beneath `dir`, sorted.
pub fn find_templates(dir: &Path) -> Result<Vec<PathBuf>> {
    find_classified(dir, is_template)
}

/// Deployment files beneath `dir`, sorted.
pub fn find_deploys(dir: &Path) -> Result<Vec<PathBuf>> {
    find_classified(dir, is_deployment)
}

fn find_classified(dir: &Path, classify: fn(&str) -> bool) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(YamlDocError::FileNotFound {
            path: dir.display().to_string(),
        })
        .with_context(|| format!("Cannot search for YAML files in {}", dir.display()));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry beneath {}: {e}", dir.display());
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if classify(&name) {
            trace!("Found {}", entry.path().display());
            files.push(entry.into_path());
        }
    }

    files.sort();
    debug!("Found {} file(s) beneath {}", files.len(), dir.display());
    Ok(files)
}

/// What [`install`] did with a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The deployment was regenerated at this path.
    Installed(PathBuf),
    /// The template does not exist.
    Missing,
    /// The file exists but is not named like a template.
    NotATemplate,
    /// The template failed validation; nothing was written.
    Invalid,
}

impl InstallOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Installed(_))
    }
}

/// Regenerates the deployment of `template`.
///
/// The template is parsed and validated with `validator`. Only when every
/// document validates is the deployment rendered and written, overwriting any
/// existing file. A missing file, a non-template name or a validation failure
/// writes nothing and is reported through the returned [`InstallOutcome`].
///
/// # Errors
///
/// Parse errors (invalid YAML, a non-mapping root) and write failures. A
/// malformed `Choose` directive is a validation failure, not an error.
pub fn install(template: &Path, validator: &Validator) -> Result<InstallOutcome> {
    if !template.is_file() {
        debug!("Template {} does not exist", template.display());
        return Ok(InstallOutcome::Missing);
    }
    let name = template.to_string_lossy();
    if !is_template(&name) {
        debug!("{} is not a template", template.display());
        return Ok(InstallOutcome::NotATemplate);
    }

    let target = PathBuf::from(associated_filename(&name)?);
    let documents = Parser::load_file(template)?;

    if !validator.validate_documents(&documents) {
        info!("Template {} failed validation, not installing", template.display());
        return Ok(InstallOutcome::Invalid);
    }

    let yaml = render_documents(&documents)?;
    atomic_write(&target, yaml.as_bytes())
        .with_context(|| format!("Failed to install {} to {}", template.display(), target.display()))?;

    info!("Installed {} -> {}", template.display(), target.display());
    Ok(InstallOutcome::Installed(target))
}

/// Renders documents as a single YAML text, separated by blank lines.
pub fn render_documents(documents: &[Document]) -> Result<String, YamlDocError> {
    let rendered = documents.iter().map(Document::to_yaml).collect::<Result<Vec<_>, _>>()?;
    Ok(rendered.join("\n"))
}
