/// Preference-document backend for small collections
///
/// Mood and stress check-ins are stored the way the original preference
/// store kept them: the collection is serialized to a JSON string and
/// embedded as one value of a shared key-value document. Several backends
/// can point at the same document with different keys without disturbing
/// each other's values.

use std::collections::BTreeMap;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::storage::{json_file::write_atomic, StorageBackend, StorageError};

/// Backend storing the collection under one key of a preferences document
pub struct PrefsBackend<T> {
    path: PathBuf,
    key: String,
    _marker: PhantomData<T>,
}

impl<T> PrefsBackend<T> {
    /// Create a backend for the given preferences file and key
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
            _marker: PhantomData,
        }
    }

    /// The preferences file this backend reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the whole preferences document, missing file reads empty
    fn load_document(&self) -> Result<BTreeMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}

impl<T> StorageBackend<T> for PrefsBackend<T>
where
    T: Serialize + DeserializeOwned,
{
    fn read(&self) -> Result<Vec<T>, StorageError> {
        let document = self.load_document()?;

        match document.get(&self.key) {
            None => Ok(Vec::new()),
            Some(raw) => Ok(serde_json::from_str(raw)?),
        }
    }

    fn write(&self, entries: &[T]) -> Result<(), StorageError> {
        // Read-modify-write of the full document keeps sibling keys intact.
        // A document that cannot be read back counts as "no data yet" and
        // is rebuilt, the same as on the read path.
        let mut document = self.load_document().unwrap_or_else(|e| {
            tracing::warn!(
                "Rebuilding unreadable preferences document {}: {}",
                self.path.display(),
                e
            );
            BTreeMap::new()
        });
        document.insert(self.key.clone(), serde_json::to_string(entries)?);

        let contents = serde_json::to_string_pretty(&document)?;
        write_atomic(&self.path, &contents)?;

        tracing::debug!(
            "Wrote {} entries under key '{}' in {}",
            entries.len(),
            self.key,
            self.path.display()
        );
        Ok(())
    }
}
