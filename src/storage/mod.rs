/// Storage layer for persisting wellness data
///
/// This module handles all persistence as whole-collection JSON documents
/// on the local filesystem. It provides a backend trait the in-memory
/// stores are wired against, plus the concrete JSON file and preference
/// document backends.

pub mod date_keyed;
pub mod json_file;
pub mod notes;
pub mod prefs;

// Re-export the main storage types
pub use date_keyed::*;
pub use json_file::*;
pub use notes::*;
pub use prefs::*;

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not resolve a writable data directory")]
    DataDir,
}

/// Trait defining the persistence collaborator for one collection
///
/// Backends always read and write the full collection. A missing file is
/// "no data yet" and reads as an empty collection, not an error; corrupt
/// data is an error and is left to the calling store to degrade from.
/// Writes replace the previous document atomically so a failed write never
/// loses previously committed data.
pub trait StorageBackend<T> {
    /// Load and deserialize the full collection
    fn read(&self) -> Result<Vec<T>, StorageError>;

    /// Serialize and overwrite the full collection
    fn write(&self, entries: &[T]) -> Result<(), StorageError>;
}

/// Get the default data directory with robust fallback strategy
///
/// Tries various per-user locations in order of preference and settles on
/// the first one that can actually be written to.
pub fn default_data_dir() -> Result<PathBuf, StorageError> {
    let potential_dirs = [
        // 1. User's home directory (preferred)
        dirs::home_dir().map(|mut p| {
            p.push(".wellness_tracker");
            p
        }),
        // 2. User's data directory (platform-specific)
        dirs::data_dir().map(|mut p| {
            p.push("wellness_tracker");
            p
        }),
        // 3. User's config directory
        dirs::config_dir().map(|mut p| {
            p.push("wellness_tracker");
            p
        }),
        // 4. Current working directory (last resort)
        std::env::current_dir().ok().map(|mut p| {
            p.push(".wellness_tracker");
            p
        }),
    ];

    for potential_dir in potential_dirs.iter().flatten() {
        if std::fs::create_dir_all(potential_dir).is_ok() {
            // Test if we can write to this directory
            let test_file = potential_dir.join(".test_write");
            if std::fs::write(&test_file, "test").is_ok() {
                let _ = std::fs::remove_file(&test_file);
                return Ok(potential_dir.clone());
            }
        }
    }

    // Ultimate fallback: use a temporary directory
    let mut temp_dir = std::env::temp_dir();
    temp_dir.push("wellness_tracker");
    std::fs::create_dir_all(&temp_dir).map_err(|_| StorageError::DataDir)?;

    tracing::warn!(
        "Using temporary directory for wellness data: {}",
        temp_dir.display()
    );
    Ok(temp_dir)
}
