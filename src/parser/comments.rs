//! Comment-block extraction.
//!
//! A docblock is the contiguous run of comment lines directly above the line
//! declaring a key. Lines are returned verbatim, comment marker included.

use crate::constants::COMMENT_MARKER;

/// Whether `line` is a comment line: optional leading whitespace, then `#`.
pub fn is_comment_line(line: &str) -> bool {
    line.trim_start().starts_with(COMMENT_MARKER)
}

/// Strips the comment marker (and one following space) from a comment line.
///
/// Indentation after that single space is kept, so nested YAML written inside
/// a docblock survives uncommenting. Non-comment lines are returned unchanged.
///
/// ```rust
/// use yamldoc_cli::parser::uncomment;
///
/// assert_eq!(uncomment("# - oranges"), "- oranges");
/// assert_eq!(uncomment("  #   nested: true"), "  nested: true");
/// assert_eq!(uncomment("#"), "");
/// ```
pub fn uncomment(line: &str) -> &str {
    let trimmed = line.trim_start();
    match trimmed.strip_prefix(COMMENT_MARKER) {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => line,
    }
}

/// Returns the comment lines immediately preceding `line_index` in `text`.
///
/// Walks upward from `line_index - 1` while lines are comments, then restores
/// top-to-bottom order. The result is empty when the line above is not a
/// comment (or `line_index` is 0).
///
/// ```rust
/// use yamldoc_cli::parser::block_above;
///
/// let text = "a: 1\n# Name of the app\n# (shown in the title bar)\nname: demo";
/// assert_eq!(block_above(text, 3), vec!["# Name of the app", "# (shown in the title bar)"]);
/// assert!(block_above(text, 1).is_empty());
/// ```
pub fn block_above(text: &str, line_index: usize) -> Vec<String> {
    let lines: Vec<&str> = text.lines().collect();
    block_above_lines(&lines, line_index)
}

/// [`block_above`] over text that has already been split into lines.
pub fn block_above_lines(lines: &[&str], line_index: usize) -> Vec<String> {
    let end = line_index.min(lines.len());
    let mut block: Vec<String> = lines[..end]
        .iter()
        .rev()
        .take_while(|line| is_comment_line(line))
        .map(|line| (*line).to_string())
        .collect();
    block.reverse();
    block
}
