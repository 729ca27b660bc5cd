/// Public library interface for the wellness tracker core
///
/// This module exports the tracker facade and the public domain and
/// storage types. The facade owns every in-memory collection (moods,
/// stress, journal, notes, practice presets) and wires each one to its
/// JSON persistence backend under a single data directory.

use std::fs;
use std::path::Path;

use thiserror::Error;

// Internal modules
mod domain;
mod storage;

// Re-export public modules and types
pub use domain::*;
pub use storage::{
    default_data_dir, DateKeyed, DateKeyedStore, JsonArrayBackend, NoteStore, PrefsBackend,
    StorageBackend, StorageError, VersionedJsonBackend,
};

use chrono::{NaiveDate, Utc};

/// File holding the shared preferences document (moods, stress)
const PREFS_FILE: &str = "prefs.json";
/// Preferences key the mood entries live under
const MOOD_KEY: &str = "mood_entries";
/// Preferences key the stress entries live under
const STRESS_KEY: &str = "stress_entries";
/// File holding the versioned journal document
const JOURNAL_FILE: &str = "journal_data.json";
/// File holding the notes array
const NOTES_FILE: &str = "health_notes.json";
/// Subdirectory and file holding the practice presets
const PRACTICES_DIR: &str = "practices";
const PRACTICES_FILE: &str = "practices.json";

/// Errors that can occur while operating the tracker
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Main wellness tracker owning every collection and its persistence
///
/// All operations are synchronous in-memory mutations followed by a
/// whole-collection write. Writes are fire-and-forget: a failed write is
/// logged and the in-memory state stays authoritative until the next
/// successful one.
pub struct WellnessTracker {
    moods: StreakTracker,
    mood_backend: PrefsBackend<MoodEntry>,
    stress: Vec<StressEntry>,
    stress_backend: PrefsBackend<StressEntry>,
    journal: DateKeyedStore<JournalEntry, VersionedJsonBackend<JournalEntry>>,
    notes: NoteStore<JsonArrayBackend<Note>>,
    practices: Vec<Practice>,
    practice_backend: JsonArrayBackend<Practice>,
}

impl WellnessTracker {
    /// Open a tracker rooted at the given data directory
    ///
    /// Creates the directory if needed and loads every collection from
    /// its document. Missing documents read as empty collections; corrupt
    /// ones degrade to empty with a logged warning.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, TrackerError> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir)?;

        let prefs_path = data_dir.join(PREFS_FILE);
        let mood_backend = PrefsBackend::new(prefs_path.clone(), MOOD_KEY);
        let stress_backend = PrefsBackend::new(prefs_path, STRESS_KEY);

        // Replay persisted check-ins into the streak tracker, the same way
        // the save system replays them into the emotions controller.
        let moods = StreakTracker::from_entries(Self::read_or_empty(&mood_backend, "mood"));
        let stress = Self::read_or_empty(&stress_backend, "stress");

        let mut journal = DateKeyedStore::new(VersionedJsonBackend::new(
            data_dir.join(JOURNAL_FILE),
        ));
        journal.load();

        let mut notes = NoteStore::new(JsonArrayBackend::new(data_dir.join(NOTES_FILE)));
        notes.load();

        let practice_backend =
            JsonArrayBackend::new(data_dir.join(PRACTICES_DIR).join(PRACTICES_FILE));
        let practices = Self::read_or_empty(&practice_backend, "practice");

        tracing::info!("Wellness tracker opened at {}", data_dir.display());

        Ok(Self {
            moods,
            mood_backend,
            stress,
            stress_backend,
            journal,
            notes,
            practices,
            practice_backend,
        })
    }

    /// Open a tracker at the default per-user data directory
    pub fn open_default() -> Result<Self, TrackerError> {
        let data_dir = default_data_dir()?;
        Self::open(data_dir)
    }

    fn read_or_empty<T, B: StorageBackend<T>>(backend: &B, what: &str) -> Vec<T> {
        match backend.read() {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Failed to load {} entries, starting empty: {}", what, e);
                Vec::new()
            }
        }
    }

    // Mood check-ins

    /// Record a mood check-in for today (UTC) and return its streak
    pub fn record_mood(&mut self, category: MoodCategory) -> u32 {
        self.record_mood_on(Utc::now().naive_utc().date(), category)
    }

    /// Record a mood check-in for a specific day and return its streak
    pub fn record_mood_on(&mut self, date: NaiveDate, category: MoodCategory) -> u32 {
        let streak = self.moods.record(MoodEntry::new(date, category));
        self.persist_moods();
        streak
    }

    /// Current streak for a category without recording anything
    pub fn mood_streak(&self, category: MoodCategory) -> u32 {
        self.moods.streak_for(category)
    }

    /// The most recently recorded mood check-in
    pub fn latest_mood(&self) -> Option<&MoodEntry> {
        self.moods.latest()
    }

    /// All mood check-ins in insertion order
    pub fn mood_entries(&self) -> &[MoodEntry] {
        self.moods.entries()
    }

    // Stress check-ins

    /// Record a stress check-in
    pub fn record_stress(&mut self, level: StressLevel) {
        self.stress.push(StressEntry::new(level));
        self.persist_stress();
    }

    /// The most recently recorded stress check-in
    pub fn latest_stress(&self) -> Option<&StressEntry> {
        self.stress.last()
    }

    /// All stress check-ins in insertion order
    pub fn stress_entries(&self) -> &[StressEntry] {
        &self.stress
    }

    // Journal and notes

    /// The health journal, one entry per calendar day
    pub fn journal(&self) -> &DateKeyedStore<JournalEntry, VersionedJsonBackend<JournalEntry>> {
        &self.journal
    }

    /// Mutable access to the health journal
    pub fn journal_mut(
        &mut self,
    ) -> &mut DateKeyedStore<JournalEntry, VersionedJsonBackend<JournalEntry>> {
        &mut self.journal
    }

    /// The tagged notes collection
    pub fn notes(&self) -> &NoteStore<JsonArrayBackend<Note>> {
        &self.notes
    }

    /// Mutable access to the notes collection
    pub fn notes_mut(&mut self) -> &mut NoteStore<JsonArrayBackend<Note>> {
        &mut self.notes
    }

    // Practice presets

    /// Add a practice timer preset
    pub fn add_practice(&mut self, practice: Practice) {
        self.practices.push(practice);
        self.persist_practices();
    }

    /// All practice presets in insertion order
    pub fn practices(&self) -> &[Practice] {
        &self.practices
    }

    /// Clear every collection and persist the now-empty state
    pub fn clear_all_data(&mut self) {
        self.moods.clear();
        self.stress.clear();
        self.journal.clear();
        self.notes.clear();
        self.practices.clear();

        self.persist_moods();
        self.persist_stress();
        self.persist_practices();

        tracing::info!("Cleared all wellness data");
    }

    fn persist_moods(&self) {
        if let Err(e) = self.mood_backend.write(self.moods.entries()) {
            tracing::warn!("Failed to save mood entries: {}", e);
        }
    }

    fn persist_stress(&self) {
        if let Err(e) = self.stress_backend.write(&self.stress) {
            tracing::warn!("Failed to save stress entries: {}", e);
        }
    }

    fn persist_practices(&self) {
        if let Err(e) = self.practice_backend.write(&self.practices) {
            tracing::warn!("Failed to save practice presets: {}", e);
        }
    }
}
