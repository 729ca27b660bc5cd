/// Note collection store
///
/// Notes are a plain list with no per-date uniqueness; entries are
/// addressed by their stable NoteId. Persistence follows the same
/// whole-collection, auto-save-on-mutation model as the date-keyed store.

use crate::domain::{Note, NoteId, NoteTag};
use crate::storage::StorageBackend;

/// An ordered collection of notes keyed by their unique ID
pub struct NoteStore<B> {
    notes: Vec<Note>,
    backend: B,
    auto_save: bool,
}

impl<B> NoteStore<B>
where
    B: StorageBackend<Note>,
{
    /// Create an empty store that persists after every mutation
    pub fn new(backend: B) -> Self {
        Self::with_auto_save(backend, true)
    }

    /// Create an empty store with explicit auto-save behavior
    pub fn with_auto_save(backend: B, auto_save: bool) -> Self {
        Self {
            notes: Vec::new(),
            backend,
            auto_save,
        }
    }

    /// Replace the collection wholesale from the backend
    ///
    /// Read failures degrade to an empty collection with a logged warning.
    pub fn load(&mut self) {
        match self.backend.read() {
            Ok(notes) => self.notes = notes,
            Err(e) => {
                tracing::warn!("Failed to load notes, starting empty: {}", e);
                self.notes = Vec::new();
            }
        }
    }

    /// Append a new note
    pub fn add(&mut self, note: Note) {
        self.notes.push(note);
        if self.auto_save {
            self.save_all();
        }
    }

    /// Replace the note with the same ID, returning whether one matched
    ///
    /// The note keeps its position in the sequence.
    pub fn update(&mut self, updated: Note) -> bool {
        match self.notes.iter().position(|n| n.id == updated.id) {
            Some(index) => {
                self.notes[index] = updated;
                if self.auto_save {
                    self.save_all();
                }
                true
            }
            None => false,
        }
    }

    /// Remove the note with the given ID, returning whether one was removed
    pub fn delete(&mut self, id: &NoteId) -> bool {
        match self.notes.iter().position(|n| &n.id == id) {
            Some(index) => {
                self.notes.remove(index);
                if self.auto_save {
                    self.save_all();
                }
                true
            }
            None => false,
        }
    }

    /// Find a note by ID
    pub fn get(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|n| &n.id == id)
    }

    /// Notes matching the notes screen filter, in stored order
    ///
    /// `search` matches the title case-insensitively (empty matches all);
    /// `tag` of `None` selects every tag.
    pub fn filter(&self, search: &str, tag: Option<NoteTag>) -> Vec<&Note> {
        self.notes.iter().filter(|n| n.matches(search, tag)).collect()
    }

    /// Remove every note
    pub fn clear(&mut self) {
        self.notes.clear();
        if self.auto_save {
            self.save_all();
        }
    }

    /// Persist the full collection, reporting success
    ///
    /// Write failures are logged and swallowed.
    pub fn save_all(&self) -> bool {
        match self.backend.write(&self.notes) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Failed to save notes: {}", e);
                false
            }
        }
    }

    /// All notes in stored order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Number of notes in the collection
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::JsonArrayBackend;
    use tempfile::tempdir;

    fn note(tag: Option<NoteTag>, title: &str) -> Note {
        Note::new(tag, title.to_string(), "body".to_string(), None).unwrap()
    }

    #[test]
    fn test_update_matches_by_id_not_content() {
        let dir = tempdir().unwrap();
        let mut store = NoteStore::new(JsonArrayBackend::new(dir.path().join("notes.json")));

        // Two notes with identical content no longer collide.
        let first = note(None, "Same");
        let second = note(None, "Same");
        let second_id = second.id.clone();
        store.add(first);
        store.add(second);

        let mut renamed = store.get(&second_id).unwrap().clone();
        renamed.title = "Renamed".to_string();
        assert!(store.update(renamed));

        assert_eq!(store.notes()[0].title, "Same");
        assert_eq!(store.notes()[1].title, "Renamed");
    }

    #[test]
    fn test_delete_by_id() {
        let dir = tempdir().unwrap();
        let mut store = NoteStore::new(JsonArrayBackend::new(dir.path().join("notes.json")));

        let kept = note(None, "keep");
        let dropped = note(None, "drop");
        let dropped_id = dropped.id.clone();
        store.add(kept);
        store.add(dropped);

        assert!(store.delete(&dropped_id));
        assert!(!store.delete(&dropped_id));
        assert_eq!(store.len(), 1);
        assert_eq!(store.notes()[0].title, "keep");
    }

    #[test]
    fn test_filter_by_search_and_tag() {
        let dir = tempdir().unwrap();
        let mut store = NoteStore::new(JsonArrayBackend::new(dir.path().join("notes.json")));

        store.add(note(Some(NoteTag::Health), "Morning walk"));
        store.add(note(Some(NoteTag::Nutrition), "Morning smoothie"));
        store.add(note(None, "Evening reading"));

        assert_eq!(store.filter("", None).len(), 3);
        assert_eq!(store.filter("morning", None).len(), 2);
        assert_eq!(store.filter("morning", Some(NoteTag::Health)).len(), 1);
        assert_eq!(store.filter("night", None).len(), 0);
    }

    #[test]
    fn test_roundtrip_through_backend() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.json");

        let mut store = NoteStore::new(JsonArrayBackend::new(path.clone()));
        store.add(note(Some(NoteTag::Inspiration), "Quote of the day"));

        let mut reloaded = NoteStore::new(JsonArrayBackend::new(path));
        reloaded.load();
        assert_eq!(reloaded.len(), 1);
        assert_eq!(reloaded.notes()[0].title, "Quote of the day");
        assert_eq!(reloaded.notes()[0].tag, Some(NoteTag::Inspiration));
    }
}
