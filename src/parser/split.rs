//! Splitting raw text into embedded YAML documents.
//!
//! The splitter is a line scanner over the `---` (start) and `...` (end)
//! marker lines. It never decodes YAML, so each returned substring keeps the
//! exact lines the comment scan later indexes into.

use crate::constants::{DOCUMENT_END, DOCUMENT_START};

/// Whether `line` opens a new document (`---`, optionally followed by more text).
pub fn is_document_start(line: &str) -> bool {
    line.starts_with(DOCUMENT_START)
}

/// Whether `line` closes the current document (`...`, optionally followed by more text).
pub fn is_document_end(line: &str) -> bool {
    line.starts_with(DOCUMENT_END)
}

/// Partitions `text` into document substrings in source order.
///
/// A start marker flushes the buffered document and begins a new one with
/// the marker line. An end marker is appended and then flushes. Whatever is
/// buffered at the end is always flushed, even when empty, so text without
/// markers yields exactly one document.
///
/// A buffer holding nothing but blank lines and bare `---` markers is not
/// flushed when the next start marker arrives, so consecutive markers do not
/// produce phantom documents.
///
/// # Examples
///
/// ```rust
/// use yamldoc_cli::parser::split_documents;
///
/// let docs = split_documents("foo: 1\n---\nbar: 2");
/// assert_eq!(docs, vec!["foo: 1".to_string(), "---\nbar: 2".to_string()]);
/// ```
pub fn split_documents(text: &str) -> Vec<String> {
    let mut documents = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if is_document_start(line) {
            if has_content(&current) {
                documents.push(current.join("\n"));
            }
            current = vec![line];
        } else if is_document_end(line) {
            current.push(line);
            documents.push(current.join("\n"));
            current.clear();
        } else {
            current.push(line);
        }
    }
    documents.push(current.join("\n"));

    tracing::trace!("Split input into {} document(s)", documents.len());
    documents
}

/// Whether a buffered document holds anything besides blank lines and bare markers.
fn has_content(lines: &[&str]) -> bool {
    lines.iter().any(|line| {
        let trimmed = line.trim();
        !trimmed.is_empty() && trimmed != DOCUMENT_START
    })
}
