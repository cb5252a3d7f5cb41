//! Behavioral specs for `gitconf show`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

// =============================================================================
// READING CONFIGURATION
// =============================================================================

/// > Properties from the clone root are printed as sorted key=value lines
#[test]
fn prints_properties_as_text() {
    let repo = Project::repo(&[("application.properties", "b=2\na=1\n")]);
    let work = Project::empty();

    show_in(&work).arg(repo.uri()).assert().success().stdout("a=1\nb=2\n");
}

/// > --output json prints a JSON object
#[test]
fn prints_properties_as_json() {
    let repo = Project::repo(&[("application.properties", "a=1\nb=2\n")]);
    let work = Project::empty();

    let output = show_in(&work).arg(repo.uri()).args(["-o", "json"]).output().unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({ "a": "1", "b": "2" }));
}

/// > --key prints a single value
#[test]
fn prints_single_key() {
    let repo = Project::repo(&[("application.properties", "db.url=jdbc:h2:mem\nport=80\n")]);
    let work = Project::empty();

    show_in(&work)
        .arg(repo.uri())
        .args(["--key", "db.url"])
        .assert()
        .success()
        .stdout("jdbc:h2:mem\n");
}

/// > --key for an absent key fails
#[test]
fn missing_key_fails() {
    let repo = Project::repo(&[("application.properties", "a=1\n")]);
    let work = Project::empty();

    show_in(&work)
        .arg(repo.uri())
        .args(["--key", "nope"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("key not found: nope"));
}

// =============================================================================
// READ ERRORS
// =============================================================================

/// > A missing properties file yields empty output by default
#[test]
fn missing_properties_file_is_empty_by_default() {
    let repo = Project::repo(&[("README.md", "# config\n")]);
    let work = Project::empty();

    show_in(&work).arg(repo.uri()).assert().success().stdout("");
}

/// > The swallowed read failure still shows up in the log
#[test]
fn missing_properties_file_is_logged() {
    let repo = Project::repo(&[("README.md", "# config\n")]);
    let work = Project::empty();

    show_in(&work)
        .arg(repo.uri())
        .assert()
        .success()
        .stderr(predicates::str::contains("application.properties"));
}

/// > --on-read-error propagate turns the missing file into a failure
#[test]
fn missing_properties_file_fails_when_propagating() {
    let repo = Project::repo(&[("README.md", "# config\n")]);
    let work = Project::empty();

    show_in(&work)
        .arg(repo.uri())
        .args(["--on-read-error", "propagate"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("unable to read configuration"));
}

// =============================================================================
// CLONING
// =============================================================================

/// > An invalid repository fails before any read
#[test]
fn invalid_repository_fails_with_clone_error() {
    let work = Project::empty();
    let missing = work.path().join("missing-repo");

    show_in(&work)
        .arg(missing.to_string_lossy().as_ref())
        .assert()
        .failure()
        .stderr(predicates::str::contains("unable to clone repository"));
}

/// > Without URI or settings, show fails
#[test]
fn missing_uri_fails() {
    let work = Project::empty();

    show_in(&work)
        .assert()
        .failure()
        .stderr(predicates::str::contains("no repository URI given"));
}

/// > The clone stays on disk under the temp root with the staging prefix
#[test]
fn clone_is_kept_under_temp_root() {
    let repo = Project::repo(&[("application.properties", "a=1\n")]);
    let work = Project::empty();

    show_in(&work)
        .arg(repo.uri())
        .args(["--staging-name", "show-clone"])
        .assert()
        .success();

    let clones = work.entries("clones");
    assert_eq!(clones.len(), 1, "expected one clone: {clones:?}");
    let name = clones[0].file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("show-clone"), "unexpected clone name {name}");
    assert!(clones[0].join("application.properties").is_file());
}

/// > Each run clones afresh into a new directory
#[test]
fn every_run_clones_afresh() {
    let repo = Project::repo(&[("application.properties", "a=1\n")]);
    let work = Project::empty();

    show_in(&work).arg(repo.uri()).assert().success().stdout("a=1\n");
    repo.file("application.properties", "a=2\n");
    repo.commit("chore: update");
    show_in(&work).arg(repo.uri()).assert().success().stdout("a=2\n");

    assert_eq!(work.entries("clones").len(), 2);
}

/// > --remove-clone deletes the clone after reading
#[test]
fn remove_clone_deletes_directory() {
    let repo = Project::repo(&[("application.properties", "a=1\n")]);
    let work = Project::empty();

    show_in(&work)
        .arg(repo.uri())
        .arg("--remove-clone")
        .assert()
        .success()
        .stdout("a=1\n");

    assert!(work.entries("clones").is_empty());
}

/// > --remove-clone deletes the clone even when the read fails
#[test]
fn remove_clone_runs_when_read_fails() {
    let repo = Project::repo(&[("README.md", "# config\n")]);
    let work = Project::empty();

    show_in(&work)
        .arg(repo.uri())
        .args(["--on-read-error", "propagate", "--remove-clone"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("unable to read configuration"));

    assert!(work.entries("clones").is_empty());
}
