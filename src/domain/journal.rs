/// JournalEntry entity for the health journal
///
/// This module defines the JournalEntry struct that represents one journal
/// page: a titled free-form text for a specific calendar day together with
/// the mood it was written under. The journal keeps at most one entry per
/// date; writing again on the same day replaces that day's page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, MoodCategory};

/// One page of the health journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Which day this page is for
    pub date: NaiveDate,
    /// Short display title
    pub title: String,
    /// Free-form body text
    pub description: String,
    /// Mood the page was written under
    pub mood: MoodCategory,
}

impl JournalEntry {
    /// Create a new journal entry with validation
    ///
    /// This validates the title and description and returns an error if
    /// any validation fails.
    pub fn new(
        date: NaiveDate,
        title: String,
        description: String,
        mood: MoodCategory,
    ) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;
        Self::validate_description(&description)?;

        Ok(Self {
            date,
            title,
            description,
            mood,
        })
    }

    // Validation helper methods

    /// Validate the entry title according to business rules
    fn validate_title(title: &str) -> Result<(), DomainError> {
        let trimmed = title.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidTitle(
                "Journal entry title cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidTitle(
                "Journal entry title cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate the entry body
    fn validate_description(description: &str) -> Result<(), DomainError> {
        if description.len() > 2000 {
            return Err(DomainError::Validation {
                message: "Journal entry description cannot be longer than 2000 characters"
                    .to_string(),
            });
        }
        Ok(())
    }
}
