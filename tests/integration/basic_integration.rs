/// Basic integration tests
use wellness_tracker::*;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    #[test]
    fn test_mood_scenario_with_same_day_overwrite() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut tracker = WellnessTracker::open(dir.path()).expect("Failed to open tracker");

        tracker.record_mood_on(day(1), MoodCategory::Happy);
        tracker.record_mood_on(day(2), MoodCategory::Happy);

        // Recording Sad on day 3 starts a fresh one-day Sad streak.
        assert_eq!(tracker.record_mood_on(day(3), MoodCategory::Sad), 1);

        // A same-day re-submission overwrites day 3 instead of duplicating it.
        assert_eq!(tracker.record_mood_on(day(3), MoodCategory::Overjoyed), 1);
        assert_eq!(tracker.mood_entries().len(), 3);
        assert_eq!(
            tracker.latest_mood().unwrap().category,
            MoodCategory::Overjoyed
        );
    }

    #[test]
    fn test_moods_survive_reopen() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        {
            let mut tracker = WellnessTracker::open(dir.path()).expect("Failed to open tracker");
            tracker.record_mood_on(day(1), MoodCategory::Happy);
            tracker.record_mood_on(day(2), MoodCategory::Happy);
            tracker.record_stress(StressLevel::MildlyTense);
        }

        let tracker = WellnessTracker::open(dir.path()).expect("Failed to reopen tracker");
        assert_eq!(tracker.mood_entries().len(), 2);
        assert_eq!(tracker.mood_streak(MoodCategory::Happy), 2);
        assert_eq!(
            tracker.latest_stress().unwrap().level,
            StressLevel::MildlyTense
        );
    }

    #[test]
    fn test_journal_workflow_across_reopen() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        {
            let mut tracker = WellnessTracker::open(dir.path()).expect("Failed to open tracker");
            let entry = JournalEntry::new(
                day(5),
                "First page".to_string(),
                "Wrote a first journal page.".to_string(),
                MoodCategory::Neutral,
            )
            .unwrap();
            tracker.journal_mut().upsert(entry);

            // Same-date upsert replaces the page, the journal stays at one entry.
            let rewritten = JournalEntry::new(
                day(5),
                "First page, rewritten".to_string(),
                "Changed my mind in the evening.".to_string(),
                MoodCategory::Happy,
            )
            .unwrap();
            tracker.journal_mut().upsert(rewritten);
            assert_eq!(tracker.journal().len(), 1);
        }

        let mut tracker = WellnessTracker::open(dir.path()).expect("Failed to reopen tracker");
        let page = tracker.journal().find(day(5)).expect("page not persisted");
        assert_eq!(page.title, "First page, rewritten");
        assert_eq!(page.mood, MoodCategory::Happy);

        assert!(tracker.journal_mut().delete(day(5)));
        assert!(tracker.journal().find(day(5)).is_none());
    }

    #[test]
    fn test_notes_and_practices_roundtrip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        let note_id;
        {
            let mut tracker = WellnessTracker::open(dir.path()).expect("Failed to open tracker");
            let note = Note::new(
                Some(NoteTag::Meditation),
                "Evening routine".to_string(),
                "Ten minutes before bed.".to_string(),
                None,
            )
            .unwrap();
            note_id = note.id.clone();
            tracker.notes_mut().add(note);

            tracker.add_practice(
                Practice::new("Wind-down".to_string(), "Breathing".to_string(), 3, 30).unwrap(),
            );
        }

        let tracker = WellnessTracker::open(dir.path()).expect("Failed to reopen tracker");
        let note = tracker.notes().get(&note_id).expect("note not persisted");
        assert_eq!(note.title, "Evening routine");
        assert_eq!(
            tracker.notes().filter("evening", Some(NoteTag::Meditation)).len(),
            1
        );

        assert_eq!(tracker.practices().len(), 1);
        assert_eq!(tracker.practices()[0].time_display(), "03:30");
    }

    #[test]
    fn test_fresh_directory_reads_empty_everywhere() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let tracker = WellnessTracker::open(dir.path()).expect("Failed to open tracker");

        assert!(tracker.mood_entries().is_empty());
        assert!(tracker.stress_entries().is_empty());
        assert!(tracker.journal().is_empty());
        assert!(tracker.notes().is_empty());
        assert!(tracker.practices().is_empty());
    }

    #[test]
    fn test_clear_all_data_persists_empty_state() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");

        {
            let mut tracker = WellnessTracker::open(dir.path()).expect("Failed to open tracker");
            tracker.record_mood_on(day(1), MoodCategory::Happy);
            tracker.record_stress(StressLevel::Overwhelmed);
            tracker.clear_all_data();
        }

        let tracker = WellnessTracker::open(dir.path()).expect("Failed to reopen tracker");
        assert!(tracker.mood_entries().is_empty());
        assert!(tracker.stress_entries().is_empty());
    }

    #[test]
    fn test_corrupt_journal_degrades_to_empty() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::write(dir.path().join("journal_data.json"), "{ not json").unwrap();

        let tracker = WellnessTracker::open(dir.path()).expect("Failed to open tracker");
        assert!(tracker.journal().is_empty());
    }
}
