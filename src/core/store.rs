//! # Contact Store
//!
//! The authoritative, ordered list of contacts plus the CSV file that
//! mirrors it.
//!
//! ```text
//! contacts.csv                 ContactStore
//! ┌──────────────────────┐     ┌──────────────────────────┐
//! │ Ada,555-0100,ada@..  │ ──▶ │ [0] Ada                  │
//! │ Bob,555-0200,bob@..  │     │ [1] Bob                  │
//! └──────────────────────┘ ◀── └──────────────────────────┘
//!          load()                 save() rewrites it all
//! ```
//!
//! There is no append-only log and no partial write: `save()` serializes the
//! whole sequence and overwrites the file. A crash between a mutation and
//! `save()` loses that mutation but never leaves half a record behind.
//!
//! The mutators (`append`, `replace`, `remove_at`) only touch memory. The
//! caller decides when to persist, which in practice is right after every
//! mutation.

use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::core::contact::Contact;

/// Number of columns in every persisted row.
pub const COLUMNS: usize = 3;

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Csv(csv::Error),
    /// A row that does not have exactly three columns.
    Malformed { line: u64, fields: usize },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "I/O error: {e}"),
            StoreError::Csv(e) => write!(f, "CSV error: {e}"),
            StoreError::Malformed { line, fields } => write!(
                f,
                "line {line}: expected {COLUMNS} fields (name, phone, email), found {fields}"
            ),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io(e) => Some(e),
            StoreError::Csv(e) => Some(e),
            StoreError::Malformed { .. } => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(err: io::Error) -> Self {
        StoreError::Io(err)
    }
}

impl From<csv::Error> for StoreError {
    fn from(err: csv::Error) -> Self {
        StoreError::Csv(err)
    }
}

// ============================================================================
// File Format
// ============================================================================

/// Read every contact from `path`.
///
/// A missing file is an empty list. Field contents are not validated, so
/// rows with blank fields load fine. A row with the wrong number of
/// columns fails the whole load with [`StoreError::Malformed`].
pub fn load(path: &Path) -> Result<Vec<Contact>, StoreError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("No contacts file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(StoreError::Io(e)),
    };

    // flexible: column count is checked below so the error can name the line
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut contacts = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() != COLUMNS {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(StoreError::Malformed {
                line,
                fields: record.len(),
            });
        }
        contacts.push(record.deserialize::<Contact>(None)?);
    }

    info!("Loaded {} contacts from {}", contacts.len(), path.display());
    Ok(contacts)
}

/// Overwrite `path` with `contacts`, one CRLF-terminated row each, no header.
pub fn write(path: &Path, contacts: &[Contact]) -> Result<(), StoreError> {
    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(file);

    for contact in contacts {
        writer.serialize(contact)?;
    }
    writer.flush()?;

    debug!("Wrote {} contacts to {}", contacts.len(), path.display());
    Ok(())
}

// ============================================================================
// Store
// ============================================================================

#[derive(Debug)]
pub struct ContactStore {
    path: PathBuf,
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Bind a store to `path` and populate it from disk.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let contacts = load(&path)?;
        Ok(Self { path, contacts })
    }

    /// Persist the full sequence, replacing whatever the file held.
    pub fn save(&self) -> Result<(), StoreError> {
        write(&self.path, &self.contacts)
    }

    pub fn append(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    /// Replace the contact at `index`. Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, contact: Contact) {
        self.contacts[index] = contact;
    }

    /// Remove and return the contact at `index`, shifting later ones down.
    /// Panics if `index` is out of bounds.
    pub fn remove_at(&mut self, index: usize) -> Contact {
        self.contacts.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.contacts.get(index)
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
