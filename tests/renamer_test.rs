use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

use invoice_rename::errors::Error;
use invoice_rename::processor::{Processor, RenameOutcome};

const CONTENT: &str = "<ReferenceNumber Type=\"Customer Acct Number\">ACME</ReferenceNumber>\n";

#[test]
fn test_rename_prepends_token() {
    let temp_dir = tempdir().unwrap();
    let source = temp_dir.path().join("CustomerInv-Schmieding-Customer-13606328543.xml");
    fs::write(&source, CONTENT).unwrap();

    let outcome = Processor::builder(&source, "ACME").build().apply().unwrap();

    let expected = temp_dir
        .path()
        .join("ACME_CustomerInv-Schmieding-Customer-13606328543.xml");
    assert_eq!(outcome, RenameOutcome::Renamed { target: expected.clone() });
    assert!(!source.exists());
    assert_eq!(fs::read_to_string(&expected).unwrap(), CONTENT);
}

#[test]
fn test_rename_keeps_directory_and_extension() {
    let temp_dir = tempdir().unwrap();
    let nested = temp_dir.path().join("invoices").join("cust");
    fs::create_dir_all(&nested).unwrap();
    let source = nested.join("inv.2022.xml");
    fs::write(&source, CONTENT).unwrap();

    let outcome = Processor::builder(&source, "ACME").build().apply().unwrap();

    let target = match outcome {
        RenameOutcome::Renamed { target } => target,
        other => panic!("expected a rename, got {other:?}"),
    };
    assert_eq!(target.parent(), source.parent());
    assert_eq!(target.extension(), source.extension());
    assert_eq!(target.file_name().unwrap(), "ACME_inv.2022.xml");
    assert!(target.exists());
}

#[test]
fn test_already_tagged_is_left_alone() {
    let temp_dir = tempdir().unwrap();
    let source = temp_dir.path().join("ACME_inv.xml");
    fs::write(&source, CONTENT).unwrap();

    let outcome = Processor::builder(&source, "ACME").build().apply().unwrap();

    assert_eq!(outcome, RenameOutcome::AlreadyTagged);
    assert!(source.exists());
}

#[test]
fn test_second_application_is_a_no_op() {
    let temp_dir = tempdir().unwrap();
    let source = temp_dir.path().join("inv.xml");
    fs::write(&source, CONTENT).unwrap();

    let RenameOutcome::Renamed { target } =
        Processor::builder(&source, "ACME").build().apply().unwrap()
    else {
        panic!("first application should rename");
    };
    let second = Processor::builder(&target, "ACME").build().apply().unwrap();

    assert_eq!(second, RenameOutcome::AlreadyTagged);
    assert!(target.exists());
}

#[test]
fn test_dry_run_only_plans() {
    let temp_dir = tempdir().unwrap();
    let source = temp_dir.path().join("inv.xml");
    fs::write(&source, CONTENT).unwrap();

    let outcome = Processor::builder(&source, "ACME")
        .dry_run(true)
        .build()
        .apply()
        .unwrap();

    assert_eq!(
        outcome,
        RenameOutcome::Planned {
            target: temp_dir.path().join("ACME_inv.xml")
        }
    );
    assert!(source.exists());
    assert!(!temp_dir.path().join("ACME_inv.xml").exists());
}

#[cfg(unix)]
#[test]
fn test_existing_destination_is_replaced() {
    let temp_dir = tempdir().unwrap();
    let source = temp_dir.path().join("inv.xml");
    let existing = temp_dir.path().join("ACME_inv.xml");
    fs::write(&source, CONTENT).unwrap();
    fs::write(&existing, "old").unwrap();

    let outcome = Processor::builder(&source, "ACME").build().apply().unwrap();

    assert_eq!(outcome, RenameOutcome::Renamed { target: existing.clone() });
    assert!(!source.exists());
    assert_eq!(fs::read_to_string(&existing).unwrap(), CONTENT);
}

#[test]
fn test_missing_source_fails() {
    let temp_dir = tempdir().unwrap();
    let source = temp_dir.path().join("missing.xml");

    let result = Processor::builder(&source, "ACME").build().apply();

    assert!(matches!(result, Err(Error::FileOperation { .. })));
}

#[test]
fn test_invalid_token_is_rejected_before_renaming() {
    let temp_dir = tempdir().unwrap();
    let source = temp_dir.path().join("inv.xml");
    fs::write(&source, CONTENT).unwrap();

    let result = Processor::builder(&source, "../escape").build().apply();

    assert!(matches!(result, Err(Error::InvalidToken { .. })));
    assert!(source.exists());
    let entries: Vec<PathBuf> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(entries, vec![source]);
}
