//! Integration tests for `yamldoc list`.

use predicates::prelude::*;
use tempfile::TempDir;
use yamldoc_cli::test_utils::{TemplateFixture, init_test_logging};

use crate::common::{write_fixture, yamldoc};

#[test]
fn test_list_text() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    write_fixture(&TemplateFixture::simple().named("app.example.yml"), temp.path());
    write_fixture(&TemplateFixture::simple().named("app.yml"), temp.path());
    write_fixture(&TemplateFixture::simple().named("db.example.yml"), temp.path());

    yamldoc()
        .arg("list")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Templates:"))
        .stdout(predicate::str::contains("installed ->"))
        .stdout(predicate::str::contains("not installed"))
        .stdout(predicate::str::contains("Deployments:"));
}

#[test]
fn test_list_json() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    write_fixture(&TemplateFixture::basic(), temp.path());

    let output = yamldoc().args(["list", "--format", "json"]).arg(temp.path()).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["templates"].as_array().unwrap().len(), 1);
    assert_eq!(json["templates"][0]["installed"], false);
    assert!(json["deployments"].as_array().unwrap().is_empty());
}

#[test]
fn test_list_missing_directory() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    yamldoc().arg("list").arg(temp.path().join("missing")).assert().failure();
}
