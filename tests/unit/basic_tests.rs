/// Basic unit tests to verify core functionality
use wellness_tracker::*;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn test_journal_entry_creation() {
        let entry = JournalEntry::new(
            day(1),
            "Test entry".to_string(),
            "A test journal entry".to_string(),
            MoodCategory::Happy,
        );

        assert!(entry.is_ok());
        let entry = entry.unwrap();
        assert_eq!(entry.title, "Test entry");
        assert_eq!(entry.mood, MoodCategory::Happy);
    }

    #[test]
    fn test_journal_entry_validation() {
        let result = JournalEntry::new(
            day(1),
            "".to_string(),
            "body".to_string(),
            MoodCategory::Neutral,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_note_creation() {
        let note = Note::new(
            Some(NoteTag::Selfcare),
            "Test note".to_string(),
            "A test note".to_string(),
            None,
        );

        assert!(note.is_ok());
        let note = note.unwrap();
        assert_eq!(note.tag, Some(NoteTag::Selfcare));
        assert_eq!(note.title, "Test note");
    }

    #[test]
    fn test_practice_creation() {
        let practice = Practice::new("Body scan".to_string(), "Meditation".to_string(), 10, 0);

        assert!(practice.is_ok());
        let practice = practice.unwrap();
        assert_eq!(practice.total_seconds(), 600);
        assert_eq!(practice.time_display(), "10:00");
    }

    #[test]
    fn test_basic_enum_values() {
        assert_eq!(MoodCategory::Overjoyed.display_name(), "Overjoyed");
        assert_eq!(StressLevel::Relaxed.score(), 1);
        assert_eq!(NoteTag::Psychology.display_name(), "Psychology");
    }

    #[test]
    fn test_streak_tracker_basics() {
        let mut tracker = StreakTracker::new();

        assert_eq!(tracker.record(MoodEntry::new(day(1), MoodCategory::Sad)), 1);
        assert_eq!(tracker.record(MoodEntry::new(day(2), MoodCategory::Sad)), 2);
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn test_tracker_creation() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let tracker = WellnessTracker::open(dir.path());
        assert!(tracker.is_ok());
    }

    #[test]
    fn test_default_data_dir_resolves() {
        let dir = default_data_dir();
        assert!(dir.is_ok());
    }
}
