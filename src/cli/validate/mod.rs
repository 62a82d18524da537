//! Validate YAMLDoc files.
//!
//! Every file is parsed and each of its mappings checked for a docblock and
//! for over-long docblock lines. Findings are printed as they would be by the
//! console sink, followed by one summary line per file.
//!
//! # Examples
//!
//! ```bash
//! yamldoc validate config/app.example.yml
//! yamldoc validate --strict config/*.example.yml
//! yamldoc validate --format json config/app.example.yml
//! ```
//!
//! # Output Formats
//!
//! ## Text Format (Default)
//! ```text
//! ERROR - Missing YAMLDoc block for 'port'
//! ✗ config/app.example.yml (1 document, 2 mappings)
//! ```
//!
//! ## JSON Format
//! ```json
//! {
//!   "valid": false,
//!   "files": [
//!     {
//!       "file": "config/app.example.yml",
//!       "valid": false,
//!       "documents": 1,
//!       "mappings": 2,
//!       "errors": ["Missing YAMLDoc block for 'port'"],
//!       "warnings": []
//!     }
//!   ]
//! }
//! ```
//!
//! The command exits non-zero when any file fails, or, with `--strict`, when
//! any file has warnings.

mod command;
mod executor;
mod results;


pub use command::{OutputFormat, ValidateCommand};
pub use results::{FileValidation, ValidationResults};
