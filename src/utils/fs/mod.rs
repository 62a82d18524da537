//! File system utilities for template and deployment files
//!
//! All writes go through [`atomic_write`], so a deployment is either fully
//! regenerated or left untouched.
//!
//! # Examples
//!
//! ```rust,no_run
//! use yamldoc_cli::utils::fs::{atomic_write, read_text_file};
//! use std::path::Path;
//!
//! # fn example() -> anyhow::Result<()> {
//! let template = read_text_file(Path::new("config/app.example.yml"))?;
//! atomic_write(Path::new("config/app.yml"), template.as_bytes())?;
//! # Ok(())
//! # }
//! ```

pub mod atomic;
pub mod dirs;
pub mod formats;

pub use atomic::atomic_write;
pub use dirs::{ensure_dir, ensure_parent_dir};
pub use formats::read_text_file;
