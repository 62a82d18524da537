//! Reading text files with error context.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads a text file with proper error handling and context.
///
/// # Errors
/// Returns an error naming the path if the file cannot be read or is not UTF-8.
pub fn read_text_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
