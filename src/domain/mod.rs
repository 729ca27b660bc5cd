/// Domain module containing core business logic and data types
///
/// This module defines the core entities (MoodEntry, JournalEntry, Note,
/// Practice, StressEntry) and the streak tracker that operates over mood
/// entries. These types represent the fundamental concepts in our
/// wellness tracking system.

pub mod journal;
pub mod mood;
pub mod note;
pub mod practice;
pub mod streak;
pub mod stress;
pub mod types;

// Re-export public types for easy access
pub use journal::*;
pub use mood::*;
pub use note::*;
pub use practice::*;
pub use streak::*;
pub use stress::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}
