/// StressEntry record for stress check-ins
///
/// Stress check-ins form an append-only log; only the most recent entry is
/// surfaced on the main screen.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::StressLevel;

/// A single stress check-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StressEntry {
    /// The level the user selected
    pub level: StressLevel,
    /// When this entry was logged
    pub recorded_at: DateTime<Utc>,
}

impl StressEntry {
    /// Create a stress entry logged right now
    pub fn new(level: StressLevel) -> Self {
        Self {
            level,
            recorded_at: Utc::now(),
        }
    }

    /// Numeric 1-5 score of the recorded level
    pub fn score(&self) -> u8 {
        self.level.score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_keeps_level_and_score() {
        let entry = StressEntry::new(StressLevel::HighlyStressed);
        assert_eq!(entry.level, StressLevel::HighlyStressed);
        assert_eq!(entry.score(), 4);
    }
}
