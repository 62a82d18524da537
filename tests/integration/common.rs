//! Shared helpers for the integration tests.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use yamldoc_cli::test_utils::TemplateFixture;

/// The `yamldoc` binary with colors disabled and `RUST_LOG` cleared.
pub fn yamldoc() -> Command {
    let mut cmd = Command::cargo_bin("yamldoc").unwrap();
    cmd.env_remove("RUST_LOG").arg("--no-color");
    cmd
}

/// Writes `fixture` into `dir` and returns its path.
pub fn write_fixture(fixture: &TemplateFixture, dir: &Path) -> PathBuf {
    fixture.write_to(dir).unwrap()
}
