/// Date-keyed collection store
///
/// This module defines the DateKeyedStore that maintains an ordered
/// sequence of entries keyed by calendar date, with date-based upsert,
/// lookup and removal, backed by an injected storage backend. The journal
/// uses it directly; mood entries implement the same key trait so the
/// streak tracker's collection can be persisted through the same seam.

use chrono::NaiveDate;

use crate::domain::{JournalEntry, MoodEntry};
use crate::storage::StorageBackend;

/// Entries that are addressed by a calendar date
pub trait DateKeyed {
    /// The date this entry is keyed by (day precision)
    fn date(&self) -> NaiveDate;
}

impl DateKeyed for JournalEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl DateKeyed for MoodEntry {
    fn date(&self) -> NaiveDate {
        self.recorded_on
    }
}

/// An ordered collection with at most one entry per calendar date
///
/// The in-memory collection is authoritative; the backend is only a
/// mirror that is rewritten wholesale after each mutation when auto-save
/// is on. Storage failures never corrupt or roll back in-memory state.
pub struct DateKeyedStore<T, B> {
    entries: Vec<T>,
    backend: B,
    auto_save: bool,
}

impl<T, B> DateKeyedStore<T, B>
where
    T: DateKeyed,
    B: StorageBackend<T>,
{
    /// Create an empty store that persists after every mutation
    pub fn new(backend: B) -> Self {
        Self::with_auto_save(backend, true)
    }

    /// Create an empty store with explicit auto-save behavior
    pub fn with_auto_save(backend: B, auto_save: bool) -> Self {
        Self {
            entries: Vec::new(),
            backend,
            auto_save,
        }
    }

    /// Replace the collection wholesale from the backend
    ///
    /// A read failure (corrupt document) degrades to an empty collection
    /// with a logged warning; it is never surfaced to the caller, and the
    /// next successful save will simply rewrite the document.
    pub fn load(&mut self) {
        match self.backend.read() {
            Ok(entries) => self.entries = entries,
            Err(e) => {
                tracing::warn!("Failed to load entries, starting empty: {}", e);
                self.entries = Vec::new();
            }
        }
    }

    /// Insert or replace the entry for its date
    ///
    /// When an entry with the same date exists it is replaced in place,
    /// keeping its position in the sequence; otherwise the entry is
    /// appended. Afterwards there is exactly one entry per date.
    pub fn upsert(&mut self, entry: T) {
        match self
            .entries
            .iter()
            .position(|e| e.date() == entry.date())
        {
            Some(index) => self.entries[index] = entry,
            None => self.entries.push(entry),
        }

        if self.auto_save {
            self.save_all();
        }
    }

    /// Find the entry for a date, absence is not an error
    pub fn find(&self, date: NaiveDate) -> Option<&T> {
        self.entries.iter().find(|e| e.date() == date)
    }

    /// Remove the entry for a date, returning whether one was removed
    pub fn delete(&mut self, date: NaiveDate) -> bool {
        match self.entries.iter().position(|e| e.date() == date) {
            Some(index) => {
                self.entries.remove(index);
                if self.auto_save {
                    self.save_all();
                }
                true
            }
            None => false,
        }
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
        if self.auto_save {
            self.save_all();
        }
    }

    /// Persist the full collection, reporting success
    ///
    /// Write failures are logged and swallowed; the in-memory collection
    /// stays authoritative either way.
    pub fn save_all(&self) -> bool {
        match self.backend.write(&self.entries) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to save entries: {}", e);
                false
            }
        }
    }

    /// All entries in their stored order
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    /// Number of entries in the collection
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
