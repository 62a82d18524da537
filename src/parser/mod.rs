//! YAMLDoc parsing.
//!
//! Parsing runs in two passes over every embedded document:
//!
//! 1. The document text is decoded with `serde_yaml`, which yields the keys and
//!    values in source order. The root must be a mapping.
//! 2. The same text is scanned line by line to find the line declaring each
//!    key, and the comment block directly above that line becomes the key's
//!    docblock.
//!
//! Both passes see the identical substring produced by [`split_documents`], so
//! line indices found in the scan always refer to the decoded document.
//!
//! # Examples
//!
//! ```rust
//! use yamldoc_cli::parser::Parser;
//!
//! let text = "---\n# Name of the application\nappname: demo\n---\n# Port\nport: 8080\n";
//! let documents = Parser::load(text).unwrap();
//!
//! assert_eq!(documents.len(), 2);
//! let appname = &documents[0].mappings()[0];
//! assert_eq!(appname.docblock().unwrap(), ["# Name of the application"]);
//! ```

pub mod comments;
pub mod split;

pub use comments::{block_above, block_above_lines, is_comment_line, uncomment};
pub use split::{is_document_end, is_document_start, split_documents};

use anyhow::{Context, Result};
use serde_yaml::Value;
use std::path::Path;

use crate::constants::{COMMENT_MARKER, DOCUMENT_END, DOCUMENT_START};
use crate::core::YamlDocError;
use crate::document::Document;
use crate::mapping::Mapping;
use crate::utils::read_text_file;
use crate::yaml::node_kind;

/// Builds [`Document`]s from YAMLDoc text.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    input: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
        }
    }

    /// Parses every embedded document of the input, in source order.
    ///
    /// Documents without any YAML content (blank lines, bare markers and
    /// comments only) are skipped.
    ///
    /// # Errors
    ///
    /// - [`YamlDocError::YamlError`] when a document is not valid YAML
    /// - [`YamlDocError::NonMappingRoot`] when a document's root is a
    ///   sequence or a scalar
    ///
    /// A malformed `Choose` directive is not an error here; it is recorded on
    /// the mapping and reported during validation.
    pub fn parse(&self) -> Result<Vec<Document>, YamlDocError> {
        let mut documents = Vec::new();
        for (index, text) in split_documents(self.input).iter().enumerate() {
            if is_blank_document(text) {
                tracing::trace!("Skipping document {} without content", index + 1);
                continue;
            }
            documents.push(parse_document(text, index + 1)?);
        }
        tracing::debug!("Parsed {} document(s)", documents.len());
        Ok(documents)
    }

    /// Parses YAMLDoc text.
    pub fn load(text: &str) -> Result<Vec<Document>, YamlDocError> {
        Parser::new(text).parse()
    }

    /// Reads and parses a YAMLDoc file.
    pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<Document>> {
        let path = path.as_ref();
        let text = read_text_file(path)?;
        Parser::load(&text).with_context(|| format!("Failed to parse YAMLDoc file: {}", path.display()))
    }
}

/// Decodes one document and attaches the docblock of every top-level key.
///
/// `number` is the 1-based position of the document in the input and only
/// used for error reporting.
fn parse_document(text: &str, number: usize) -> Result<Document, YamlDocError> {
    let root: Value = serde_yaml::from_str(text)?;
    let root = match root {
        Value::Mapping(root) => root,
        other => {
            return Err(YamlDocError::NonMappingRoot {
                document: number,
                found: node_kind(&other).to_string(),
            });
        }
    };

    let lines: Vec<&str> = text.lines().collect();
    let mut cursor = 0;
    let mut document = Document::new();

    for (key, value) in root {
        let mut mapping = Mapping::new(key, value);

        match find_key_line(&lines, mapping.key(), cursor) {
            Some(line) => {
                let docblock = block_above_lines(&lines, line);
                tracing::trace!(
                    "Key '{}' declared on line {} with {} docblock line(s)",
                    mapping.key_text(),
                    line + 1,
                    docblock.len()
                );
                mapping.set_docblock(Some(docblock));
                cursor = line + 1;
            }
            None => {
                tracing::debug!("Could not locate key '{}' in document {number}", mapping.key_text());
            }
        }

        document.push(mapping);
    }

    Ok(document)
}

/// Finds the line declaring `key`, searching from `start` first and then
/// from the top of the document.
///
/// Only unindented, non-comment lines are candidates, so nested keys and
/// keys mentioned inside block scalars never match.
fn find_key_line(lines: &[&str], key: &Value, start: usize) -> Option<usize> {
    let matches = |index: &usize| {
        declared_key(lines[*index])
            .and_then(|text| serde_yaml::from_str::<Value>(text).ok())
            .is_some_and(|candidate| &candidate == key)
    };

    (start..lines.len()).find(matches).or_else(|| (0..start.min(lines.len())).find(matches))
}

/// The key text of a top-level `key: value` line, quotes included.
fn declared_key(line: &str) -> Option<&str> {
    let first = line.chars().next()?;
    if first.is_whitespace()
        || first == COMMENT_MARKER
        || first == '-'
        || first == '?'
        || line.starts_with(DOCUMENT_START)
        || line.starts_with(DOCUMENT_END)
    {
        return None;
    }

    let end = match first {
        '"' => closing_quote(line, '"', true)?,
        '\'' => closing_quote(line, '\'', false)?,
        _ => {
            return line
                .match_indices(':')
                .find(|(index, _)| separates_value(&line[index + 1..]))
                .map(|(index, _)| line[..index].trim_end());
        }
    };

    let key = &line[..=end];
    let rest = line[end + 1..].trim_start();
    rest.strip_prefix(':').filter(|after| separates_value(after)).map(|_| key)
}

/// Whether the text after a colon makes that colon a key separator.
fn separates_value(after: &str) -> bool {
    after.is_empty() || after.starts_with(char::is_whitespace)
}

/// Byte index of the quote closing a quoted scalar that opens at index 0.
fn closing_quote(line: &str, quote: char, backslash_escapes: bool) -> Option<usize> {
    let mut chars = line.char_indices().skip(1).peekable();
    while let Some((index, c)) = chars.next() {
        if backslash_escapes && c == '\\' {
            chars.next();
        } else if c == quote {
            // '' is an escaped quote inside a single-quoted scalar
            if !backslash_escapes && chars.peek().is_some_and(|(_, next)| *next == quote) {
                chars.next();
            } else {
                return Some(index);
            }
        }
    }
    None
}

fn is_blank_document(text: &str) -> bool {
    text.lines().all(|line| {
        let trimmed = line.trim();
        trimmed.is_empty()
            || trimmed == DOCUMENT_START
            || trimmed == DOCUMENT_END
            || is_comment_line(trimmed)
    })
}
