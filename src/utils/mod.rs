//! Cross-platform utilities for YAMLDoc
//!
//! Currently this is the file system layer used by the template/deployment
//! adapter: reading templates and writing regenerated deployments atomically.

pub mod fs;

pub use fs::{atomic_write, ensure_dir, read_text_file};
