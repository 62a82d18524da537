//! Test fixtures for YAMLDoc templates
//!
//! Each fixture pairs a file name with its content and can be written into a
//! temporary directory. Unit tests and the integration suite share them.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A YAMLDoc file used in tests.
#[derive(Clone, Debug)]
pub struct TemplateFixture {
    pub name: String,
    pub content: String,
}

impl TemplateFixture {
    /// One key with a three-line docblock.
    pub fn simple() -> Self {
        Self {
            name: "simple.yml".to_string(),
            content: r"---
# The purpose of this fixture is to show the simplest possible YAMLDoc file:
# one key, described in a
# docblock directly above it.
purpose: Simplest possible YAMLDoc example
"
            .to_string(),
        }
    }

    /// Single document, every key documented, with both `Choose` forms.
    pub fn basic() -> Self {
        Self {
            name: "basic_config.example.yml".to_string(),
            content: r"---
# Name of the application, shown in the title bar
appname: Hello World

# Log levels to enable
# Choose (1..2): [debug, info, warn]
levels:
  - info

# Deployment environment
# Choose:
# - development
# - production
environment: production
"
            .to_string(),
        }
    }

    /// A template with one undocumented key.
    pub fn missing_docblock() -> Self {
        Self {
            name: "missing_yamldoc.example.yml".to_string(),
            content: r"---
# Name of the application
appname: Hello World

port: 8080
"
            .to_string(),
        }
    }

    /// A documented template whose docblock line is 81 characters long.
    pub fn long_line() -> Self {
        Self {
            name: "long_line.example.yml".to_string(),
            content: format!("---\n# {}\nappname: Hello World\n", "x".repeat(79)),
        }
    }

    /// Three documents: the first without a marker, the second closed by
    /// `...`, the third with an over-long docblock line.
    pub fn multi_document() -> Self {
        Self {
            name: "multi_document.example.yml".to_string(),
            content: r"# Name of the application
appname: Hello World
---
# Port to listen on
# Choose: [80, 8080]
port: 8080
...
---
# Hosts allowed to connect, one per line. This line is deliberately longer than eighty characters.
allowed_hosts:
  - localhost
"
            .to_string(),
        }
    }

    /// A `Choose` line that is not a list, followed by an undocumented key.
    pub fn malformed_choices() -> Self {
        Self {
            name: "malformed_choices.example.yml".to_string(),
            content: r"---
# Port to listen on
# Choose: any port above 1024
port: 8080

host: localhost
"
            .to_string(),
        }
    }

    /// The same content under another file name.
    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    /// Writes the fixture into `dir` and returns its path.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.name);
        fs::write(&path, &self.content)
            .with_context(|| format!("Failed to write fixture {}", path.display()))?;
        Ok(path)
    }

    /// Path of the deployment this fixture installs to inside `dir`.
    pub fn deployment_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.name.replacen(".example", "", 1))
    }
}
