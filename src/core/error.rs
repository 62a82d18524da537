//! Error handling for YAMLDoc
//!
//! This module provides the error types and user-friendly error reporting for
//! YAMLDoc. The error system follows two rules:
//! 1. **Strongly-typed errors** for the fatal conditions the engine can hit
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! Validation findings (a missing docblock, a malformed `Choose` directive, an
//! over-long comment line) are NOT errors. They are reported through a
//! [`MessageSink`](crate::validator::MessageSink) and surface only as a
//! boolean validation outcome.
//!
//! # Error Categories
//!
//! - **Construction**: [`YamlDocError::MissingKey`]
//! - **Structure**: [`YamlDocError::NonMappingRoot`], [`YamlDocError::YamlError`]
//! - **Naming**: [`YamlDocError::InvalidFilename`]
//! - **File system**: [`YamlDocError::IoError`], [`YamlDocError::FileNotFound`]
//!
//! # Examples
//!
//! ```rust,no_run
//! use yamldoc_cli::core::{YamlDocError, user_friendly_error};
//!
//! let error = YamlDocError::InvalidFilename {
//!     filename: "/usr/bin/fortune".to_string(),
//! };
//! let context = user_friendly_error(anyhow::Error::from(error));
//! context.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for YAMLDoc operations
///
/// Every variant is fatal: the caller cannot safely continue with the input
/// that produced it. Recoverable findings are reported by the validator instead.
///
/// # Examples
///
/// ```rust,no_run
/// use yamldoc_cli::core::YamlDocError;
///
/// fn handle_error(error: YamlDocError) {
///     match error {
///         YamlDocError::NonMappingRoot { document, .. } => {
///             eprintln!("Document {document} must be a key/value mapping");
///         }
///         YamlDocError::InvalidFilename { filename } => {
///             eprintln!("{filename} is neither a template nor a deployment");
///         }
///         _ => eprintln!("Unexpected error: {error}"),
///     }
/// }
/// ```
#[derive(Error, Debug)]
pub enum YamlDocError {
    /// A mapping was constructed without a key
    ///
    /// Every YAMLDoc mapping is identified by its key, so a builder without a
    /// key (or with a null key) cannot produce a mapping.
    #[error("YAMLDoc mapping requires a key")]
    MissingKey,

    /// A document's root node is not a mapping
    ///
    /// YAMLDoc attaches docblocks to top-level keys, which only exist when the
    /// document root is a key/value mapping.
    ///
    /// # Fields
    /// - `document`: 1-based index of the offending document in its source
    /// - `found`: The kind of node found instead (sequence, string, ...)
    #[error("YAMLDoc document {document} root node is not a mapping (found {found})")]
    NonMappingRoot {
        /// 1-based index of the document in its source text
        document: usize,
        /// Kind of YAML node found at the root
        found: String,
    },


    /// A filename follows neither the template nor the deployment convention
    #[error("'{filename}' is neither a YAMLDoc template nor a deployment")]
    InvalidFilename {
        /// The filename that was rejected
        filename: String,
    },

    /// A file required by the operation does not exist
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path of the missing file
        path: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization error
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Other error
    #[error("{message}")]
    Other {
        /// Generic error message
        message: String,
    },
}

impl Clone for YamlDocError {
    fn clone(&self) -> Self {
        match self {
            Self::MissingKey => Self::MissingKey,
            Self::NonMappingRoot {
                document,
                found,
            } => Self::NonMappingRoot {
                document: *document,
                found: found.clone(),
            },
            Self::InvalidFilename {
                filename,
            } => Self::InvalidFilename {
                filename: filename.clone(),
            },
            Self::FileNotFound {
                path,
            } => Self::FileNotFound {
                path: path.clone(),
            },
            // For errors that don't implement Clone, convert to Other
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::YamlError(e) => Self::Other {
                message: format!("YAML error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// Error context wrapper that provides user-friendly error information
///
/// `ErrorContext` wraps a [`YamlDocError`] and adds an optional suggestion and
/// optional details. This is how the `yamldoc` binary presents fatal errors.
///
/// # Display Format
///
/// 1. **Error**: The main error message in red
/// 2. **Details**: Additional context in yellow (optional)
/// 3. **Suggestion**: Actionable steps in green (optional)
///
/// # Examples
///
/// ```rust,no_run
/// use yamldoc_cli::core::{YamlDocError, ErrorContext};
///
/// let context = ErrorContext::new(YamlDocError::MissingKey)
///     .with_suggestion("Pass a key to Mapping::builder()")
///     .with_details("Every mapping is identified by its key");
///
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying YAMLDoc error
    pub error: YamlDocError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from a [`YamlDocError`]
    #[must_use]
    pub const fn new(error: YamlDocError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with actionable suggestions
///
/// Recognizes [`YamlDocError`], [`std::io::Error`] and [`serde_yaml::Error`]
/// anywhere in the error chain. Anything else is reported with its full chain
/// of causes.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    for cause in error.chain() {
        if let Some(yamldoc_error) = cause.downcast_ref::<YamlDocError>() {
            return create_error_context(yamldoc_error.clone());
        }

        if let Some(yaml_error) = cause.downcast_ref::<serde_yaml::Error>() {
            return create_error_context(YamlDocError::Other {
                message: format!("YAML error: {yaml_error}"),
            })
            .with_suggestion(
                "Check the YAML syntax of the file. Verify indentation, quoting and list markers",
            )
            .with_details(match yaml_error.location() {
                Some(location) => format!(
                    "The YAML decoder stopped at line {}, column {} of the document",
                    location.line(),
                    location.column()
                ),
                None => "The YAML decoder rejected the document".to_string(),
            });
        }

        if let Some(io_error) = cause.downcast_ref::<std::io::Error>() {
            match io_error.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    return ErrorContext::new(YamlDocError::Other {
                        message: error.to_string(),
                    })
                    .with_suggestion("Check the file permissions of the template and its deployment directory")
                    .with_details("YAMLDoc needs to read templates and write deployments");
                }
                std::io::ErrorKind::NotFound => {
                    return ErrorContext::new(YamlDocError::Other {
                        message: error.to_string(),
                    })
                    .with_suggestion("Check that the file exists and the path is correct");
                }
                _ => {}
            }
        }
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();

    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(YamlDocError::Other {
        message,
    })
}

/// Create appropriate [`ErrorContext`] with suggestions for specific YAMLDoc errors
fn create_error_context(error: YamlDocError) -> ErrorContext {
    match &error {
        YamlDocError::NonMappingRoot { .. } => ErrorContext::new(error)
            .with_suggestion("Make every document in the file a mapping of top-level keys, e.g. 'name: value'")
            .with_details("YAMLDoc attaches comment blocks to top-level keys; lists and plain values have none"),

        YamlDocError::InvalidFilename { .. } => ErrorContext::new(error)
            .with_suggestion("Templates are named like 'settings.example.yml', deployments like 'settings.yml'"),

        YamlDocError::FileNotFound { path } => {
            let suggestion = format!("Check that '{path}' exists and the path is correct");
            ErrorContext::new(error).with_suggestion(suggestion)
        }

        YamlDocError::MissingKey => ErrorContext::new(error)
            .with_suggestion("Supply a non-null key when building a mapping"),

        _ => ErrorContext::new(error),
    }
}
