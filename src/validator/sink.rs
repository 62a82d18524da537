//! Receivers for validation findings.
//!
//! The validator never prints or logs on its own; it hands each finding to a
//! [`MessageSink`]. The binary uses [`ConsoleSink`], tests and the JSON output
//! mode use [`CapturingSink`].

use colored::Colorize;
use serde::Serialize;
use std::fmt;
use std::sync::{Mutex, MutexGuard};

/// Severity of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The mapping fails validation
    Error,
    /// A convention is broken, validation still passes
    Warn,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("ERROR"),
            Self::Warn => f.write_str("WARN"),
        }
    }
}

/// A single finding as recorded by [`CapturingSink`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// How serious the finding is
    pub severity: Severity,
    /// The message as emitted by the validator
    pub message: String,
}

/// Capability set every validation sink provides.
pub trait MessageSink: Send + Sync {
    /// Receives an error-severity finding.
    fn error(&self, message: &str);

    /// Receives a warning-severity finding.
    fn warn(&self, message: &str);
}

/// Prints findings to stdout as `SEVERITY - message`.
///
/// With colors enabled, errors are red and warnings yellow. `colored` also
/// honours `NO_COLOR` and non-terminal output.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    colorize: bool,
}

impl ConsoleSink {
    /// Console sink with optional colors.
    pub const fn new(colorize: bool) -> Self {
        Self {
            colorize,
        }
    }

    /// Formats a finding the way it is printed.
    pub fn format(&self, severity: Severity, message: &str) -> String {
        let line = format!("{severity} - {message}");
        if !self.colorize {
            return line;
        }
        match severity {
            Severity::Error => line.red().to_string(),
            Severity::Warn => line.yellow().to_string(),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new(true)
    }
}

impl MessageSink for ConsoleSink {
    fn error(&self, message: &str) {
        println!("{}", self.format(Severity::Error, message));
    }

    fn warn(&self, message: &str) {
        println!("{}", self.format(Severity::Warn, message));
    }
}

/// Records findings in memory, in emission order.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use yamldoc_cli::mapping::Mapping;
/// use yamldoc_cli::validator::{CapturingSink, Validator};
///
/// let sink = Arc::new(CapturingSink::new());
/// let validator = Validator::new(sink.clone());
///
/// let mut mapping = Mapping::new("appname", "demo");
/// mapping.set_docblock(Some(Vec::new()));
/// assert!(!validator.validate_mapping(&mapping));
/// assert_eq!(sink.errors(), vec!["Missing YAMLDoc block for 'appname'".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct CapturingSink {
    findings: Mutex<Vec<Finding>>,
}

impl CapturingSink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Finding>> {
        self.findings.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, severity: Severity, message: &str) {
        self.lock().push(Finding {
            severity,
            message: message.to_string(),
        });
    }

    /// Every finding so far.
    pub fn findings(&self) -> Vec<Finding> {
        self.lock().clone()
    }

    fn messages(&self, severity: Severity) -> Vec<String> {
        self.lock()
            .iter()
            .filter(|finding| finding.severity == severity)
            .map(|finding| finding.message.clone())
            .collect()
    }

    /// Error messages so far.
    pub fn errors(&self) -> Vec<String> {
        self.messages(Severity::Error)
    }

    /// Warning messages so far.
    pub fn warnings(&self) -> Vec<String> {
        self.messages(Severity::Warn)
    }

    /// Number of findings of any severity.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes and returns every finding.
    pub fn take(&self) -> Vec<Finding> {
        std::mem::take(&mut *self.lock())
    }
}

impl MessageSink for CapturingSink {
    fn error(&self, message: &str) {
        self.record(Severity::Error, message);
    }

    fn warn(&self, message: &str) {
        self.record(Severity::Warn, message);
    }
}
