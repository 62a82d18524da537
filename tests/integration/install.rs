//! Integration tests for `yamldoc install`.

use predicates::prelude::*;
use tempfile::TempDir;
use yamldoc_cli::parser::Parser;
use yamldoc_cli::test_utils::{TemplateFixture, init_test_logging};

use crate::common::{write_fixture, yamldoc};

#[test]
fn test_install_regenerates_deployment() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let fixture = TemplateFixture::basic();
    let template = write_fixture(&fixture, temp.path());

    yamldoc()
        .arg("install")
        .arg(&template)
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed"));

    let written = std::fs::read_to_string(fixture.deployment_in(temp.path())).unwrap();
    assert!(written.starts_with("---\n# Name of the application, shown in the title bar\nappname: Hello World\n"));
    assert!(written.contains("# Choose (1..2): [debug, info, warn]\n"));
    assert!(written.contains("# - production\nenvironment: production\n"));

    let from_template = Parser::load(&fixture.content).unwrap();
    let regenerated = Parser::load(&written).unwrap();
    assert_eq!(from_template, regenerated);
}

#[test]
fn test_install_searches_path() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config");
    std::fs::create_dir(&config).unwrap();
    let fixture = TemplateFixture::simple().named("simple.example.yml");
    write_fixture(&fixture, &config);

    yamldoc().arg("install").arg("--path").arg(temp.path()).assert().success();

    assert!(fixture.deployment_in(&config).exists());
}

#[test]
fn test_install_invalid_template_writes_nothing() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let fixture = TemplateFixture::missing_docblock();
    let template = write_fixture(&fixture, temp.path());

    yamldoc()
        .arg("install")
        .arg(&template)
        .assert()
        .failure()
        .stdout(predicate::str::contains("ERROR - Missing YAMLDoc block for 'port'"))
        .stdout(predicate::str::contains("failed validation"));

    assert!(!fixture.deployment_in(temp.path()).exists());
}

#[test]
fn test_install_malformed_choices_writes_nothing() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let fixture = TemplateFixture::malformed_choices();
    let template = write_fixture(&fixture, temp.path());

    yamldoc()
        .arg("install")
        .arg(&template)
        .assert()
        .failure()
        .stdout(predicate::str::contains("Invalid choice section on line 2"))
        .stdout(predicate::str::contains("failed validation"));

    assert!(!fixture.deployment_in(temp.path()).exists());
}

#[test]
fn test_install_non_template() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    let file = write_fixture(&TemplateFixture::simple(), temp.path());

    yamldoc()
        .arg("install")
        .arg(&file)
        .assert()
        .failure()
        .stdout(predicate::str::contains("is not a template"));
}

#[test]
fn test_install_missing_template() {
    init_test_logging(None);
    let temp = TempDir::new().unwrap();
    yamldoc()
        .arg("install")
        .arg(temp.path().join("missing.example.yml"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("does not exist"));
}
