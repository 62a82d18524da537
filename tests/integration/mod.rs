//! Integration test suite for YAMLDoc
//!
//! These tests drive the `yamldoc` binary end to end against
//! [`TemplateFixture`](yamldoc_cli::test_utils::TemplateFixture) files written
//! into temporary directories.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! RUST_LOG=yamldoc_cli=debug cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **validate**: Text and JSON validation output, strict mode, exit codes
//! - **install**: Regenerating deployments from templates
//! - **list**: Template and deployment discovery

mod common;
mod install;
mod list;
mod validate;
