/// Streak calculation over mood check-ins
///
/// This module defines the StreakTracker that owns the full history of
/// mood entries and computes the current consecutive-day streak for a
/// mood category.

use chrono::NaiveDate;

use crate::domain::{MoodCategory, MoodEntry};

/// Tracks mood check-ins and computes consecutive-day streaks
///
/// The tracker owns the insertion-ordered list of entries. Entries are
/// never removed: recording a second check-in on an already-used date
/// overwrites that date's category in place, so history stays one entry
/// per calendar day.
#[derive(Debug, Clone, Default)]
pub struct StreakTracker {
    entries: Vec<MoodEntry>,
}

impl StreakTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create a tracker from previously persisted entries
    ///
    /// The entries keep their stored order; it is the insertion order of
    /// the original check-ins, not necessarily date order.
    pub fn from_entries(entries: Vec<MoodEntry>) -> Self {
        Self { entries }
    }

    /// Record a check-in and return the streak for its category
    ///
    /// Same-day duplicates are resolved first: every existing entry on the
    /// new entry's date has its category overwritten in place (position
    /// preserved, nothing appended), so a re-submission silently rewrites
    /// that day's history. Only when the date is new is the entry appended.
    pub fn record(&mut self, entry: MoodEntry) -> u32 {
        let mut overwrote = false;
        for existing in self
            .entries
            .iter_mut()
            .filter(|e| e.recorded_on == entry.recorded_on)
        {
            existing.category = entry.category;
            overwrote = true;
        }

        if !overwrote {
            self.entries.push(entry);
        }

        self.streak_for(entry.category)
    }

    /// Count consecutive days with the given category, newest first
    ///
    /// The walk always restarts from the most recent entry over the full
    /// history. A day gap greater than one breaks the streak, as does the
    /// first entry whose category differs. The first entry walked checks
    /// its gap against itself, which always passes, so a lone matching
    /// entry yields a streak of 1.
    pub fn streak_for(&self, category: MoodCategory) -> u32 {
        // Sort entries by date (newest first)
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.recorded_on.cmp(&a.recorded_on));

        let mut streak = 0;
        let mut last_date: Option<NaiveDate> = None;

        for entry in &sorted {
            let reference = last_date.unwrap_or(entry.recorded_on);

            let gap_days = (reference - entry.recorded_on).num_days();
            if gap_days > 1 {
                break;
            }

            if entry.category == category {
                streak += 1;
                last_date = Some(entry.recorded_on);
            } else {
                break;
            }
        }

        streak
    }

    /// The most recently recorded entry, by insertion order
    pub fn latest(&self) -> Option<&MoodEntry> {
        self.entries.last()
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    /// Number of distinct check-in days recorded
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no check-in has been recorded yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all recorded entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
