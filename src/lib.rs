//! YAMLDoc - documented YAML configuration templates
//!
//! YAMLDoc attaches a comment block (a *docblock*) to every top-level key of a
//! YAML configuration template, validates that every key is documented, and
//! regenerates deployment files from validated templates.
//!
//! # Architecture Overview
//!
//! Parsing combines a real YAML decode with a line scan of the same text:
//!
//! ```text
//! text ─► split_documents ─► serde_yaml decode ─┐
//!                        └─► key line scan ─► block_above ─► derive_choices
//!                                               │
//!                                   Document { Mapping { key, value, docblock, choices } }
//!                                               │
//!                                   Validator ─► MessageSink
//!                                               │
//!                                   to_yaml ─► deployment file
//! ```
//!
//! # Core Modules
//!
//! - [`parser`] - Document splitting, comment blocks and key association
//! - [`choices`] - The `Choose` directive embedded in docblocks
//! - [`mapping`] / [`document`] - The parsed data model and its serialization
//! - [`validator`] - Docblock rules and the sinks findings are reported to
//! - [`yamlfile`] - Template/deployment naming, discovery and installation
//!
//! ## Supporting Modules
//! - [`cli`] - The `yamldoc` command-line interface
//! - [`core`] - Error types and user-facing error reporting
//! - [`utils`] - File system helpers (atomic writes, reading text)
//! - [`constants`] - Naming and formatting conventions
//!
//! # Docblock Format
//!
//! ```yaml
//! ---
//! # Name shown in the title bar
//! appname: Hello World
//!
//! # Log levels to enable
//! # Choose (1..2): [debug, info, warn]
//! levels: [info]
//!
//! # Deployment environment
//! # Choose:
//! # - development
//! # - production
//! environment: production
//! ```
//!
//! The first docblock line is a free-text description. A later line holding
//! `Choose` introduces the allowed values, inline or as a commented block list,
//! with an optional cardinality: a count `(2)` or an inclusive range `(1..2)`.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use yamldoc_cli::parser::Parser;
//! use yamldoc_cli::validator::{CapturingSink, Validator};
//!
//! let text = "# Name shown in the title bar\nappname: Hello World\n";
//! let documents = Parser::load(text).unwrap();
//!
//! let sink = Arc::new(CapturingSink::new());
//! assert!(Validator::new(sink.clone()).validate_documents(&documents));
//! assert!(sink.is_empty());
//! ```

pub mod choices;
pub mod cli;
pub mod constants;
pub mod core;
pub mod document;
pub mod mapping;
pub mod parser;
pub mod utils;
pub mod validator;
pub mod yaml;
pub mod yamlfile;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
