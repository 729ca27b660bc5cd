/// JSON file backends for whole-collection persistence
///
/// Two document shapes are supported: a bare JSON array (notes, practice
/// presets) and a versioned wrapper `{version, last_updated, entries}`
/// (the journal). Both write atomically by serializing to a temporary
/// file next to the target and renaming it into place, so a crash or a
/// full disk mid-write cannot truncate previously committed data.

use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::storage::{StorageBackend, StorageError};

/// Current on-disk format version of versioned documents
const FORMAT_VERSION: u32 = 1;

/// Write a document atomically: temp file in the same directory, then rename
pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Backend storing the collection as a bare, pretty-printed JSON array
pub struct JsonArrayBackend<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> JsonArrayBackend<T> {
    /// Create a backend for the given file path
    ///
    /// The file is not touched until the first write; a never-written
    /// backend reads as an empty collection.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// The file this backend reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> StorageBackend<T> for JsonArrayBackend<T>
where
    T: Serialize + DeserializeOwned,
{
    fn read(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write(&self, entries: &[T]) -> Result<(), StorageError> {
        let contents = serde_json::to_string_pretty(entries)?;
        write_atomic(&self.path, &contents)?;

        tracing::debug!(
            "Wrote {} entries to {}",
            entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// On-disk shape of a versioned collection document
#[derive(Serialize, Deserialize)]
struct VersionedDocument<T> {
    version: u32,
    last_updated: DateTime<Utc>,
    entries: Vec<T>,
}

/// Backend storing the collection inside a versioned JSON document
///
/// The wrapper stamps a format version and a last-updated timestamp on
/// every write. There is a single format version so far; the field is
/// read back but only logged when it differs.
pub struct VersionedJsonBackend<T> {
    path: PathBuf,
    _marker: PhantomData<T>,
}

impl<T> VersionedJsonBackend<T> {
    /// Create a backend for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// The file this backend reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl<T> StorageBackend<T> for VersionedJsonBackend<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    fn read(&self) -> Result<Vec<T>, StorageError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let document: VersionedDocument<T> = serde_json::from_str(&contents)?;

        if document.version != FORMAT_VERSION {
            tracing::warn!(
                "Document {} has format version {}, expected {}",
                self.path.display(),
                document.version,
                FORMAT_VERSION
            );
        }

        Ok(document.entries)
    }

    fn write(&self, entries: &[T]) -> Result<(), StorageError> {
        let document = VersionedDocument {
            version: FORMAT_VERSION,
            last_updated: Utc::now(),
            entries: entries.to_vec(),
        };

        let contents = serde_json::to_string_pretty(&document)?;
        write_atomic(&self.path, &contents)?;

        tracing::debug!(
            "Wrote {} entries to {}",
            document.entries.len(),
            self.path.display()
        );
        Ok(())
    }
}
