/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like MoodCategory, StressLevel,
/// NoteTag and the NoteId identifier that are used by MoodEntry, JournalEntry,
/// Note and other domain entities.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The five mood categories a user can check in with
///
/// This is a closed set matching the five faces on the check-in screen,
/// ordered from most negative to most positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoodCategory {
    Angry,
    Sad,
    Neutral,
    Happy,
    Overjoyed,
}

impl MoodCategory {
    /// Get the display name for this mood category
    pub fn display_name(&self) -> &str {
        match self {
            MoodCategory::Angry => "Angry",
            MoodCategory::Sad => "Sad",
            MoodCategory::Neutral => "Neutral",
            MoodCategory::Happy => "Happy",
            MoodCategory::Overjoyed => "Overjoyed",
        }
    }

    /// Classify this category for calendar coloring and summaries
    ///
    /// Angry and Sad read as negative days, Happy and Overjoyed as positive
    /// ones, Neutral stays in the middle.
    pub fn valence(&self) -> Valence {
        match self {
            MoodCategory::Angry | MoodCategory::Sad => Valence::Negative,
            MoodCategory::Neutral => Valence::Neutral,
            MoodCategory::Happy | MoodCategory::Overjoyed => Valence::Positive,
        }
    }
}

/// Coarse grouping of mood categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Valence {
    Negative,
    Neutral,
    Positive,
}

/// Self-reported stress level from a stress check-in
///
/// Levels carry a 1-5 score, lowest for relaxed and highest for overwhelmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StressLevel {
    Relaxed = 1,
    MildlyTense = 2,
    ModeratelyStressed = 3,
    HighlyStressed = 4,
    Overwhelmed = 5,
}

impl StressLevel {
    /// Numeric 1-5 score for this level
    pub fn score(&self) -> u8 {
        *self as u8
    }

    /// Get the display name for this stress level
    pub fn display_name(&self) -> &str {
        match self {
            StressLevel::Relaxed => "Relaxed",
            StressLevel::MildlyTense => "Mildly tense",
            StressLevel::ModeratelyStressed => "Moderately stressed",
            StressLevel::HighlyStressed => "Highly stressed",
            StressLevel::Overwhelmed => "Overwhelmed",
        }
    }
}

/// Tags for organizing health notes
///
/// Notes can optionally carry one of these tags; the notes screen filters
/// by them. An untagged note is represented as `Option::None` on the note
/// itself rather than a dedicated variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteTag {
    Health,
    Meditation,
    Selfcare,
    Stress,
    Psychology,
    Nutrition,
    Inspiration,
}

impl NoteTag {
    /// Get the display name for this tag
    pub fn display_name(&self) -> &str {
        match self {
            NoteTag::Health => "Health",
            NoteTag::Meditation => "Meditation",
            NoteTag::Selfcare => "Selfcare",
            NoteTag::Stress => "Stress",
            NoteTag::Psychology => "Psychology",
            NoteTag::Nutrition => "Nutrition",
            NoteTag::Inspiration => "Inspiration",
        }
    }
}

/// Unique identifier for a note
///
/// This is a wrapper around UUID to provide a stable identity for notes,
/// so updates and deletes never have to match on title and description.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteId(pub Uuid);

impl NoteId {
    /// Generate a new random note ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a note ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }

    /// Convert to string representation
    pub fn to_string(&self) -> String {
        self.0.to_string()
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}
