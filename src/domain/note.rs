/// Note entity for free-form tagged health notes
///
/// Unlike journal pages, notes are not keyed by date: a user can keep any
/// number of them. Each note carries a stable unique identifier so that
/// updates and deletes address exactly one note, even when two notes share
/// the same title and description.

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, NoteId, NoteTag};

/// A free-form health note with an optional tag and photo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier for this note
    pub id: NoteId,
    /// Optional tag used by the notes screen filter
    pub tag: Option<NoteTag>,
    /// Short display title
    pub title: String,
    /// Free-form body text
    pub description: String,
    /// Optional attached photo bytes
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub photo: Option<Vec<u8>>,
}

impl Note {
    /// Create a new note with validation
    ///
    /// A fresh unique ID is generated; the ID never changes for the
    /// lifetime of the note.
    pub fn new(
        tag: Option<NoteTag>,
        title: String,
        description: String,
        photo: Option<Vec<u8>>,
    ) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;
        Self::validate_description(&description)?;

        Ok(Self {
            id: NoteId::new(),
            tag,
            title,
            description,
            photo,
        })
    }

    /// Check if this note has an attached photo
    pub fn has_photo(&self) -> bool {
        self.photo.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// Check if this note passes the notes screen filter
    ///
    /// An empty search matches every title, otherwise the title must
    /// contain the search text case-insensitively. A tag filter of `None`
    /// matches every note; a concrete tag must match the note's tag.
    pub fn matches(&self, search: &str, tag: Option<NoteTag>) -> bool {
        let title_matches =
            search.is_empty() || self.title.to_lowercase().contains(&search.to_lowercase());
        let tag_matches = tag.is_none() || self.tag == tag;

        title_matches && tag_matches
    }

    // Validation helper methods

    fn validate_title(title: &str) -> Result<(), DomainError> {
        let trimmed = title.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidTitle(
                "Note title cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidTitle(
                "Note title cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_description(description: &str) -> Result<(), DomainError> {
        if description.len() > 2000 {
            return Err(DomainError::Validation {
                message: "Note description cannot be longer than 2000 characters".to_string(),
            });
        }
        Ok(())
    }
}
