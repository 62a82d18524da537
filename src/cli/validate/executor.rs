//! Validation execution logic and orchestration.

use anyhow::{Result, anyhow};
use colored::Colorize;
use std::path::Path;
use std::sync::Arc;

use crate::parser::Parser;
use crate::validator::{CapturingSink, ConsoleSink, Finding, MessageSink, Severity, Validator};

use super::command::{OutputFormat, ValidateCommand};
use super::results::{FileValidation, ValidationResults};

impl ValidateCommand {
    /// Validates every file and prints the results in the requested format.
    ///
    /// All files are validated even after a failure.
    ///
    /// # Errors
    ///
    /// Returns an error when any file fails validation (including parse
    /// failures), after the results have been printed.
    pub fn execute(self) -> Result<()> {
        let console = ConsoleSink::default();
        let mut results = ValidationResults::default();

        for file in &self.files {
            let (outcome, findings) = self.validate_file(file);
            if self.format == OutputFormat::Text {
                print_text(&console, &outcome, &findings);
            }
            results.push(outcome);
        }

        if self.format == OutputFormat::Json {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }

        if results.valid {
            Ok(())
        } else {
            Err(anyhow!("Validation failed for {} file(s)", results.failed()))
        }
    }

    /// Parses and validates one file, capturing every finding.
    ///
    /// A file that cannot be read or parsed is reported as invalid with the
    /// parse error among its errors.
    pub fn validate_file(&self, path: &Path) -> (FileValidation, Vec<Finding>) {
        let mut outcome = FileValidation {
            file: path.display().to_string(),
            ..Default::default()
        };

        let documents = match Parser::load_file(path) {
            Ok(documents) => documents,
            Err(e) => {
                tracing::debug!("Failed to parse {}: {e:#}", path.display());
                let finding = Finding {
                    severity: Severity::Error,
                    message: format!("{e:#}"),
                };
                outcome.errors.push(finding.message.clone());
                return (outcome, vec![finding]);
            }
        };

        let sink = Arc::new(CapturingSink::new());
        let validator = Validator::new(sink.clone());
        let documents_valid = validator.validate_documents(&documents);

        outcome.documents = documents.len();
        outcome.mappings = documents.iter().map(|document| document.len()).sum();
        outcome.errors = sink.errors();
        outcome.warnings = sink.warnings();
        outcome.valid = documents_valid && !(self.strict && !outcome.warnings.is_empty());

        (outcome, sink.take())
    }
}

fn print_text(console: &ConsoleSink, outcome: &FileValidation, findings: &[Finding]) {
    for finding in findings {
        match finding.severity {
            Severity::Error => console.error(&finding.message),
            Severity::Warn => console.warn(&finding.message),
        }
    }

    let summary = format!(
        "{} ({} {}, {} {})",
        outcome.file,
        outcome.documents,
        plural(outcome.documents, "document"),
        outcome.mappings,
        plural(outcome.mappings, "mapping"),
    );
    if outcome.valid {
        println!("{} {summary}", "✓".green());
    } else {
        println!("{} {summary}", "✗".red());
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 { noun.to_string() } else { format!("{noun}s") }
}
