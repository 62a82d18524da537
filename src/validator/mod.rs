//! Validation of YAMLDoc mappings and documents.
//!
//! The [`Validator`] checks every mapping for:
//!
//! - **Presence**: a key found with no comment block above it is an error
//! - **Choices**: a `Choose` directive that cannot be decoded is an error
//! - **Wrap length**: each docblock line longer than 80 characters is a warning
//! - **Value**: reserved extension point that currently always passes
//!
//! Findings are never raised. They go to the injected [`MessageSink`] and the
//! validate methods return `false` when any error was found. Aggregate checks
//! visit every element even after a failure, so all findings are reported.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use yamldoc_cli::parser::Parser;
//! use yamldoc_cli::validator::{CapturingSink, Validator};
//!
//! let documents = Parser::load("---\n# Application name\nappname: demo\nport: 80\n").unwrap();
//!
//! let sink = Arc::new(CapturingSink::new());
//! let validator = Validator::new(sink.clone());
//!
//! assert!(!validator.validate_documents(&documents));
//! assert_eq!(sink.errors(), vec!["Missing YAMLDoc block for 'port'".to_string()]);
//! ```

mod sink;

pub use sink::{CapturingSink, ConsoleSink, Finding, MessageSink, Severity};

use serde_yaml::Value;
use std::sync::Arc;

use crate::constants::RECOMMENDED_WRAP_LENGTH;
use crate::document::Document;
use crate::mapping::Mapping;

/// Applies the YAMLDoc rules and reports findings to a sink.
#[derive(Clone)]
pub struct Validator {
    sink: Arc<dyn MessageSink>,
}

impl Validator {
    /// Validator reporting to `sink`.
    pub fn new(sink: Arc<dyn MessageSink>) -> Self {
        Self {
            sink,
        }
    }

    /// The sink findings are reported to.
    pub fn sink(&self) -> &Arc<dyn MessageSink> {
        &self.sink
    }

    /// Checks the docblock of `mapping` for presence, choice syntax and wrap length.
    ///
    /// - An absent docblock fails without a message (the key was never located
    ///   in the source text).
    /// - An empty docblock fails with `Missing YAMLDoc block for '<key>'`.
    /// - A malformed `Choose` directive fails with an error naming its line.
    /// - Every line over the wrap length produces a warning but does not fail.
    pub fn validate_docblock(&self, mapping: &Mapping) -> bool {
        let Some(docblock) = mapping.docblock() else {
            tracing::debug!("No docblock attached to '{}'", mapping.key_text());
            return false;
        };

        let key = mapping.key_text();
        let mut valid = true;

        if docblock.is_empty() {
            self.sink.error(&format!("Missing YAMLDoc block for '{key}'"));
            valid = false;
        }

        if let Some(problem) = mapping.choice_error() {
            self.sink.error(&format!(
                "Invalid choice section on line {} of YAMLDoc block for '{key}': {}",
                problem.line, problem.reason
            ));
            valid = false;
        }

        for (index, line) in docblock.iter().enumerate() {
            if line.chars().count() > RECOMMENDED_WRAP_LENGTH {
                self.sink.warn(&format!(
                    "Line {} of YAMLDoc block for '{key}' exceeds recommended wrap length ({RECOMMENDED_WRAP_LENGTH} characters)",
                    index + 1
                ));
            }
        }

        valid
    }

    /// Checks a value against its docblock.
    ///
    /// Always passes. This is the extension point for enforcing choice
    /// sections; callers rely on it never failing today.
    pub fn validate_value(&self, _docblock: Option<&[String]>, _value: &Value) -> bool {
        true
    }

    /// Validates docblock and value of one mapping.
    pub fn validate_mapping(&self, mapping: &Mapping) -> bool {
        let valid_docblock = self.validate_docblock(mapping);
        let valid_value = self.validate_value(mapping.docblock(), mapping.value());
        valid_docblock && valid_value
    }

    /// Validates every mapping of `document`, without stopping at the first failure.
    pub fn validate_document(&self, document: &Document) -> bool {
        let valid = document
            .mappings()
            .iter()
            .filter(|mapping| self.validate_mapping(mapping))
            .count();
        tracing::debug!("{valid} of {} mappings valid", document.len());
        valid == document.len()
    }

    /// Validates a collection of documents, without stopping at the first failure.
    pub fn validate_documents(&self, documents: &[Document]) -> bool {
        documents.iter().fold(true, |all_valid, document| {
            self.validate_document(document) && all_valid
        })
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(Arc::new(ConsoleSink::default()))
    }
}

impl std::fmt::Debug for Validator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Validator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn capturing() -> (Arc<CapturingSink>, Validator) {
        let sink = Arc::new(CapturingSink::new());
        let validator = Validator::new(sink.clone());
        (sink, validator)
    }

    fn mapping_with(key: &str, docblock: Option<Vec<&str>>) -> Mapping {
        let mut mapping = Mapping::new(key, "value");
        mapping.set_docblock(docblock.map(|lines| lines.into_iter().map(String::from).collect()));
        mapping
    }

    #[test]
    fn test_empty_docblock_is_an_error() {
        let (sink, validator) = capturing();
        let mapping = mapping_with("appname", Some(vec![]));

        assert!(!validator.validate_docblock(&mapping));
        assert_eq!(sink.errors().len(), 1);
        assert!(sink.errors()[0].contains("Missing YAMLDoc block"));
        assert!(sink.errors()[0].contains("'appname'"));
        assert!(sink.warnings().is_empty());
    }

    #[test]
    fn test_absent_docblock_fails_silently() {
        let (sink, validator) = capturing();
        let mapping = mapping_with("appname", None);

        assert!(!validator.validate_docblock(&mapping));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_long_line_is_a_warning() {
        let (sink, validator) = capturing();
        let long_line = format!("# {}", "0".repeat(79));
        assert_eq!(long_line.len(), 81);
        let mapping = mapping_with("foo", Some(vec![long_line.as_str()]));

        assert!(validator.validate_docblock(&mapping));
        assert_eq!(sink.warnings().len(), 1);
        assert_eq!(
            sink.warnings()[0],
            "Line 1 of YAMLDoc block for 'foo' exceeds recommended wrap length (80 characters)"
        );
        assert!(sink.errors().is_empty());
    }

    #[test]
    fn test_eighty_characters_is_fine() {
        let (sink, validator) = capturing();
        let line = format!("# {}", "0".repeat(78));
        let mapping = mapping_with("foo", Some(vec![line.as_str()]));

        assert!(validator.validate_docblock(&mapping));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_every_long_line_is_reported() {
        let (sink, validator) = capturing();
        let long_line = format!("# {}", "x".repeat(90));
        let mapping =
            mapping_with("foo", Some(vec![long_line.as_str(), "# short", long_line.as_str()]));

        assert!(validator.validate_docblock(&mapping));
        let warnings = sink.warnings();
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].starts_with("Line 1 "));
        assert!(warnings[1].starts_with("Line 3 "));
    }

    #[test]
    fn test_wrap_length_counts_characters() {
        let (sink, validator) = capturing();
        let line = format!("# {}", "é".repeat(78));
        assert!(line.len() > 80);
        let mapping = mapping_with("foo", Some(vec![line.as_str()]));

        assert!(validator.validate_docblock(&mapping));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_malformed_choices_are_an_error() {
        let (sink, validator) = capturing();
        let mapping =
            mapping_with("port", Some(vec!["# Port to listen on", "# Choose: any port above 1024"]));

        assert!(!validator.validate_docblock(&mapping));
        assert_eq!(
            sink.errors(),
            vec![
                "Invalid choice section on line 2 of YAMLDoc block for 'port': choices must be a YAML list, found string"
                    .to_string()
            ]
        );
    }

    #[test]
    fn test_malformed_choices_do_not_hide_other_findings() {
        let (sink, validator) = capturing();
        let document = Document::with_mappings(vec![
            mapping_with("levels", Some(vec!["# Levels", "# Choose (3..1): [a, b]"])),
            mapping_with("port", Some(vec![])),
        ]);

        assert!(!validator.validate_document(&document));
        let errors = sink.errors();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("range 3..1 is empty"));
        assert_eq!(errors[1], "Missing YAMLDoc block for 'port'");
    }

    #[test]
    fn test_validate_value_always_passes() {
        let (_, validator) = capturing();
        assert!(validator.validate_value(None, &Value::Null));
        let docblock = vec!["# Fruit".to_string(), "# Choose: [apples]".to_string()];
        assert!(validator.validate_value(Some(&docblock), &Value::from("not listed")));
    }

    #[test]
    fn test_document_validation_does_not_short_circuit() {
        let (sink, validator) = capturing();
        let long_line = format!("# {}", "x".repeat(90));
        let document = Document::with_mappings(vec![
            mapping_with("first", Some(vec![])),
            mapping_with("second", Some(vec![long_line.as_str()])),
            mapping_with("third", Some(vec![])),
            mapping_with("fourth", Some(vec!["# fine"])),
        ]);

        assert!(!validator.validate_document(&document));
        assert_eq!(sink.errors().len(), 2);
        assert_eq!(sink.warnings().len(), 1);
        assert!(sink.errors()[1].contains("'third'"));
    }

    #[test]
    fn test_validate_documents_visits_all() {
        let (sink, validator) = capturing();
        let documents = vec![
            Document::with_mappings(vec![mapping_with("a", Some(vec![]))]),
            Document::with_mappings(vec![mapping_with("b", Some(vec!["# ok"]))]),
            Document::with_mappings(vec![mapping_with("c", Some(vec![]))]),
        ];

        assert!(!validator.validate_documents(&documents));
        assert_eq!(sink.errors().len(), 2);
    }

    #[test]
    fn test_valid_documents() {
        let (sink, validator) = capturing();
        let documents = vec![Document::with_mappings(vec![mapping_with("a", Some(vec!["# A"]))])];

        assert!(validator.validate_documents(&documents));
        assert!(validator.validate_documents(&[]));
        assert!(sink.is_empty());
    }
}
