//! Catalog file loading: error messages carry the file path, valid files seed a directory.

use assert_fs::prelude::*;
use predicates::prelude::predicate;
use roster_core::{catalog, CatalogError, Directory};

const SAMPLE: &str = "\
Debate Team:
  description: Develop public speaking and argumentation skills
  schedule: Fridays, 4:00 PM - 5:30 PM
  max_participants: 2
  participants:
    - ava@mergington.edu
Art Club:
  description: Explore your creativity through painting and drawing
  capacity: 15
";

#[test]
fn load_valid_catalog_seeds_directory() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("catalog.yaml");
    file.write_str(SAMPLE).expect("write");

    let loaded = catalog::load_catalog_at(file.path()).expect("load");
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded.get("Debate Team").unwrap().capacity, 2);
    assert_eq!(
        loaded.get("Debate Team").unwrap().schedule.as_deref(),
        Some("Fridays, 4:00 PM - 5:30 PM")
    );

    let directory = Directory::new(loaded);
    directory.signup("Debate Team", "liam@mergington.edu").expect("signup");
    let err = directory.signup("Debate Team", "noah@mergington.edu").unwrap_err();
    assert!(err.to_string().contains("Activity is full"), "got: {err}");
}

#[test]
fn load_missing_catalog_mentions_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let missing = dir.child("absent.yaml");
    missing.assert(predicate::path::missing());

    let err = catalog::load_catalog_at(missing.path()).unwrap_err();
    assert!(matches!(err, CatalogError::CatalogNotFound { .. }), "got: {err}");
    assert!(err.to_string().contains("absent.yaml"));
}

#[test]
fn load_corrupt_yaml_returns_parse_error_with_path() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("catalog.yaml");
    file.write_str(": : corrupt : yaml : !!!\n  - broken: [unclosed").expect("write");

    let err = catalog::load_catalog_at(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("catalog.yaml"));
}

#[test]
fn load_list_instead_of_mapping_is_a_parse_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("catalog.yaml");
    file.write_str("- this is a list, not a mapping\n").expect("write");

    let err = catalog::load_catalog_at(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }), "got: {err}");
}

#[test]
fn missing_capacity_is_a_parse_error() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("catalog.yaml");
    file.write_str("Art Club:\n  description: paint\n").expect("write");

    let err = catalog::load_catalog_at(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }), "got: {err}");
}

#[test]
fn padded_participant_is_rejected_at_load() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("catalog.yaml");
    file.write_str("Chess Club:\n  description: chess\n  capacity: 5\n  participants: [\" a@x\"]\n")
        .expect("write");

    let err = catalog::load_catalog_at(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Invalid { .. }), "got: {err}");
    assert!(err.to_string().contains("surrounding whitespace"), "got: {err}");
}

#[test]
fn same_email_with_and_without_padding_is_rejected() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("catalog.yaml");
    file.write_str("Chess Club:\n  description: chess\n  capacity: 5\n  participants: [a@x, \" a@x\"]\n")
        .expect("write");

    let err = catalog::load_catalog_at(file.path()).unwrap_err();
    assert!(matches!(err, CatalogError::Invalid { .. }), "got: {err}");
}

#[test]
fn loaded_participant_matches_trimmed_signup_and_unregister() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("catalog.yaml");
    file.write_str("Chess Club:\n  description: chess\n  capacity: 5\n  participants: [a@x]\n")
        .expect("write");

    let directory = Directory::try_new(catalog::load_catalog_at(file.path()).expect("load"))
        .expect("valid catalog");
    let err = directory.signup("Chess Club", " a@x ").unwrap_err();
    assert!(err.to_string().contains("Already signed up"), "got: {err}");

    directory.unregister("Chess Club", " a@x").expect("unregister padded input");
    assert!(directory.get_activity("Chess Club").unwrap().participants.is_empty());
}
