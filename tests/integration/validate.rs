//! Integration tests for `yamldoc validate`.

use predicates::prelude::*;
use tempfile::TempDir;
use yamldoc_cli::test_utils::{TemplateFixture, init_test_logging};

use crate::common::{write_fixture, yamldoc};

#[test]
fn test_validate_simple_fixture() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let file = write_fixture(&TemplateFixture::simple(), temp.path());

    yamldoc()
        .arg("validate")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("1 document, 1 mapping"));
}

#[test]
fn test_validate_missing_docblock() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let file = write_fixture(&TemplateFixture::missing_docblock(), temp.path());

    yamldoc()
        .arg("validate")
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("ERROR - Missing YAMLDoc block for 'port'"))
        .stdout(predicate::str::contains("✗"));
}

#[test]
fn test_validate_multi_document_warns() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let file = write_fixture(&TemplateFixture::multi_document(), temp.path());

    yamldoc()
        .arg("validate")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "WARN - Line 1 of YAMLDoc block for 'allowed_hosts' exceeds recommended wrap length (80 characters)",
        ))
        .stdout(predicate::str::contains("3 documents, 3 mappings"));
}

#[test]
fn test_validate_strict_fails_on_warnings() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let file = write_fixture(&TemplateFixture::multi_document(), temp.path());

    yamldoc().arg("validate").arg("--strict").arg(&file).assert().failure();
}

#[test]
fn test_validate_malformed_choices_reports_all_findings() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let file = write_fixture(&TemplateFixture::malformed_choices(), temp.path());

    yamldoc()
        .arg("validate")
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "ERROR - Invalid choice section on line 2 of YAMLDoc block for 'port': choices must be a YAML list, found string",
        ))
        .stdout(predicate::str::contains("ERROR - Missing YAMLDoc block for 'host'"))
        .stdout(predicate::str::contains("1 document, 2 mappings"));
}

#[test]
fn test_validate_reports_every_file() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let broken = write_fixture(&TemplateFixture::missing_docblock(), temp.path());
    let simple = write_fixture(&TemplateFixture::simple(), temp.path());

    yamldoc()
        .arg("validate")
        .arg(&broken)
        .arg(&simple)
        .assert()
        .failure()
        .stdout(predicate::str::contains("simple.yml"))
        .stderr(predicate::str::contains("Validation failed for 1 file(s)"));
}

#[test]
fn test_validate_json_output() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let basic = write_fixture(&TemplateFixture::basic(), temp.path());
    let broken = write_fixture(&TemplateFixture::missing_docblock(), temp.path());

    let output =
        yamldoc().args(["validate", "--format", "json"]).arg(&basic).arg(&broken).output().unwrap();

    assert!(!output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["valid"], false);

    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["valid"], true);
    assert_eq!(files[0]["mappings"], 3);
    assert_eq!(files[1]["valid"], false);
    assert_eq!(files[1]["errors"][0], "Missing YAMLDoc block for 'port'");
}

#[test]
fn test_validate_missing_file() {
    init_test_logging(None);
    yamldoc()
        .args(["validate", "does-not-exist.yml"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_validate_requires_a_file() {
    yamldoc().arg("validate").assert().failure();
}
