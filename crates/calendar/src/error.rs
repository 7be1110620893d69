use models::military_time::InvalidTimeValue;
use thiserror::Error;

/// Errors produced while laying out or annotating a schedule
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScheduleError {
    /// A meeting time is not valid military time
    #[error("Invalid time value: {0}")]
    InvalidTimeValue(#[from] InvalidTimeValue),

    /// A physical meeting does not end after it starts
    #[error("Meeting of {course} runs from {start} to {end}")]
    InvalidTimeRange { course: String, start: i32, end: i32 },

    /// The guideline store could not answer a lookup
    #[error("Guideline lookup failed: {0}")]
    GuidelineLookupFailed(String),
}

impl ScheduleError {
    /// Returns true if the caller sent bad schedule data, as opposed to a storage failure
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidTimeValue(_) | Self::InvalidTimeRange { .. })
    }
}
