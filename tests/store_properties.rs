use contact_manager::core::store::{self, ContactStore, StoreError};
use contact_manager::core::Contact;
use std::fs;
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn scratch() -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.csv");
    (dir, path)
}

fn people() -> Vec<Contact> {
    vec![
        Contact::new("Ada Lovelace", "555-0100", "ada@example.com"),
        Contact::new("Grace \"Amazing\" Hopper", "555-0101", "grace@example.com"),
        Contact::new("Turing, Alan", "555-0102", "alan@example.com"),
        Contact::new("Bob", "555-0200", "bob@x.com"),
    ]
}

// ============================================================================
// Round-trip
// ============================================================================

#[test]
fn test_load_then_save_reproduces_file_bytes() {
    let (_dir, path) = scratch();
    store::write(&path, &people()).unwrap();
    let before = fs::read(&path).unwrap();

    let store = ContactStore::open(&path).unwrap();
    store.save().unwrap();

    assert_eq!(fs::read(&path).unwrap(), before);
    assert_eq!(store.contacts(), people().as_slice());
}

#[test]
fn test_external_file_with_quotes_survives_round_trip() {
    let (_dir, path) = scratch();
    // Written by another tool: quoted delimiter and escaped quote
    fs::write(&path, "\"Turing, Alan\",555-0102,alan@example.com\n").unwrap();

    let store = ContactStore::open(&path).unwrap();
    assert_eq!(store.contacts()[0].name, "Turing, Alan");
    store.save().unwrap();
    assert_eq!(store::load(&path).unwrap(), store.contacts());
}

#[test]
fn test_crlf_file_saves_byte_identical() {
    let (_dir, path) = scratch();
    let legacy = "Ada,555-0100,ada@example.com\r\nBob,555-0200,bob@x.com\r\n";
    fs::write(&path, legacy).unwrap();

    let store = ContactStore::open(&path).unwrap();
    assert_eq!(store.len(), 2);
    store.save().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), legacy);
}

// ============================================================================
// Append / Delete
// ============================================================================

#[test]
fn test_append_then_reload_puts_contact_last() {
    let (_dir, path) = scratch();
    store::write(&path, &people()).unwrap();

    let mut store = ContactStore::open(&path).unwrap();
    let carol = Contact::new("Carol", "555-0300", "carol@x.com");
    store.append(carol.clone());
    store.save().unwrap();

    let reloaded = store::load(&path).unwrap();
    assert_eq!(reloaded.len(), people().len() + 1);
    assert_eq!(reloaded.last(), Some(&carol));
}

#[test]
fn test_remove_at_then_reload_keeps_relative_order() {
    let (_dir, path) = scratch();
    store::write(&path, &people()).unwrap();

    let mut store = ContactStore::open(&path).unwrap();
    let removed = store.remove_at(1);
    store.save().unwrap();

    let reloaded = store::load(&path).unwrap();
    let mut expected = people();
    expected.remove(1);
    assert_eq!(reloaded, expected);
    assert!(!reloaded.contains(&removed));
}

// ============================================================================
// Load failures
// ============================================================================

#[test]
fn test_extra_column_is_rejected() {
    let (_dir, path) = scratch();
    fs::write(&path, "Ada,555-0100,ada@example.com,extra\n").unwrap();
    assert!(matches!(
        ContactStore::open(&path),
        Err(StoreError::Malformed { line: 1, fields: 4 })
    ));
}

#[test]
fn test_invalid_utf8_is_rejected() {
    let (_dir, path) = scratch();
    fs::write(&path, b"Ada,555-0100,\xff\xfe\n").unwrap();
    assert!(matches!(ContactStore::open(&path), Err(StoreError::Csv(_))));
}

#[cfg(unix)]
#[test]
fn test_directory_in_place_of_file_fails_in_reader() {
    let dir = tempfile::tempdir().unwrap();
    // open(2) accepts a directory; the first read inside csv gets EISDIR
    let result = ContactStore::open(dir.path());
    assert!(matches!(result, Err(StoreError::Csv(_))));
}
