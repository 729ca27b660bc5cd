/// Practice preset for guided practice timers
///
/// A practice is a named countdown preset (breathing, meditation, ...) the
/// timer screen runs. Only the preset itself is data; the per-second
/// countdown lives in the UI layer.

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// A guided practice timer preset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Practice {
    /// Display title (e.g. "Evening wind-down")
    pub title: String,
    /// Kind of practice (e.g. "Breathing", "Meditation")
    pub kind: String,
    /// Minutes part of the duration
    pub minutes: u32,
    /// Seconds part of the duration, always below 60
    pub seconds: u32,
}

impl Practice {
    /// Create a new practice preset with validation
    pub fn new(
        title: String,
        kind: String,
        minutes: u32,
        seconds: u32,
    ) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::InvalidTitle(
                "Practice title cannot be empty".to_string(),
            ));
        }

        if seconds >= 60 {
            return Err(DomainError::InvalidValue {
                message: "Practice seconds must be below 60".to_string(),
            });
        }

        if minutes == 0 && seconds == 0 {
            return Err(DomainError::InvalidValue {
                message: "Practice duration must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            title,
            kind,
            minutes,
            seconds,
        })
    }

    /// Total duration of the preset in seconds
    pub fn total_seconds(&self) -> u32 {
        self.minutes * 60 + self.seconds
    }

    /// Duration formatted as MM:SS for display
    pub fn time_display(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }
}
