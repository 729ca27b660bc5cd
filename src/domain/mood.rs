/// MoodEntry entity for recording mood check-ins
///
/// This module defines the MoodEntry struct that represents a single mood
/// check-in on a specific day. Time-of-day is deliberately discarded: the
/// streak tracker and the calendar both work at day precision.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::MoodCategory;

/// A mood check-in for a specific calendar day
///
/// Within a streak tracker there is at most one entry per date; recording
/// a second entry for the same day overwrites the category of the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Which day this check-in is for
    pub recorded_on: NaiveDate,
    /// The mood the user selected
    pub category: MoodCategory,
}

impl MoodEntry {
    /// Create a mood entry for a specific day
    pub fn new(recorded_on: NaiveDate, category: MoodCategory) -> Self {
        Self {
            recorded_on,
            category,
        }
    }

    /// Create a mood entry for today (UTC)
    pub fn today(category: MoodCategory) -> Self {
        Self::new(Utc::now().naive_utc().date(), category)
    }
}
