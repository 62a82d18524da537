//! Core types and functionality for YAMLDoc
//!
//! This module holds the error handling foundation shared by every other
//! module: the strongly-typed [`YamlDocError`], the user-facing
//! [`ErrorContext`], and [`user_friendly_error`] which turns any
//! [`anyhow::Error`] into something a CLI user can act on.
//!
//! # Error Handling Pattern
//!
//! ```rust
//! use yamldoc_cli::core::{YamlDocError, user_friendly_error};
//! use anyhow::Result;
//!
//! fn example_operation() -> Result<String> {
//!     Err(YamlDocError::MissingKey.into())
//! }
//!
//! if let Err(e) = example_operation() {
//!     let friendly = user_friendly_error(e);
//!     assert!(friendly.suggestion.is_some());
//! }
//! ```

pub mod error;

pub use error::{ErrorContext, YamlDocError, user_friendly_error};
