//! Global constants used throughout the YAMLDoc codebase.
//!
//! This module contains the naming conventions and formatting limits that
//! are shared by the parser, the validator and the filesystem adapter.
//! Defining them centrally keeps the conventions discoverable.

/// Recommended maximum length of a single YAMLDoc comment line (80 characters).
///
/// Longer lines are reported as warnings, never as errors.
pub const RECOMMENDED_WRAP_LENGTH: usize = 80;

/// Substring identifying a template file (`settings.example.yml`, `app.example.yml.erb`).
pub const TEMPLATE_MARKER: &str = "example.yml";

/// Substring identifying any YAML file handled by YAMLDoc.
pub const YAML_MARKER: &str = ".yml";

/// Infix removed from a template name to obtain its deployment name.
pub const TEMPLATE_INFIX: &str = ".example";

/// Prefix of a YAML document start marker line (`---`).
pub const DOCUMENT_START: &str = "---";

/// Prefix of a YAML document end marker line (`...`).
pub const DOCUMENT_END: &str = "...";

/// Comment marker introducing a YAMLDoc line.
pub const COMMENT_MARKER: char = '#';

/// Keyword introducing a choice section inside a docblock.
pub const CHOOSE_KEYWORD: &str = "Choose";

/// Separator between the bounds of an inclusive choice range (`1..3`).
pub const RANGE_SEPARATOR: &str = "..";
