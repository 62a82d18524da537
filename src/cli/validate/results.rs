//! Validation results structure for aggregating validation outcomes.

use serde::Serialize;

/// Results of a `validate` run, used for JSON output.
///
/// `valid` is true only when every file is valid.
#[derive(Debug, Serialize)]
pub struct ValidationResults {
    /// Overall status across all files
    pub valid: bool,
    /// Per-file outcomes, in the order the files were given
    pub files: Vec<FileValidation>,
}

impl ValidationResults {
    /// Records one file's outcome.
    pub fn push(&mut self, file: FileValidation) {
        self.valid &= file.valid;
        self.files.push(file);
    }

    /// Number of files that failed.
    pub fn failed(&self) -> usize {
        self.files.iter().filter(|file| !file.valid).count()
    }
}

impl Default for ValidationResults {
    fn default() -> Self {
        Self {
            valid: true,
            files: Vec::new(),
        }
    }
}

/// Outcome of validating one file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileValidation {
    /// Path as given on the command line
    pub file: String,
    /// Whether the file passed (warnings count as failures in strict mode)
    pub valid: bool,
    /// Number of documents parsed
    pub documents: usize,
    /// Number of top-level mappings across all documents
    pub mappings: usize,
    /// Error findings and parse errors
    pub errors: Vec<String>,
    /// Warning findings
    pub warnings: Vec<String>,
}
