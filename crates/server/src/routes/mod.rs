use crate::dtos::course::CourseRequest;
use axum::http::StatusCode;
use calendar::ScheduleError;
use log::{error, warn};
use models::course::CourseOccurrence;
use sea_orm::DbErr;

pub mod guideline;
pub mod health;
pub mod layout;
pub mod semester;

/// Converts request courses, rejecting the whole request on the first bad one
pub(crate) fn to_occurrences(
    courses: Vec<CourseRequest>,
) -> Result<Vec<CourseOccurrence>, StatusCode> {
    courses
        .into_iter()
        .map(CourseOccurrence::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            warn!("Rejected course payload: {e}");
            StatusCode::UNPROCESSABLE_ENTITY
        })
}

pub(crate) fn schedule_status(err: ScheduleError) -> StatusCode {
    if err.is_invalid_input() {
        warn!("Rejected schedule: {err}");
        StatusCode::UNPROCESSABLE_ENTITY
    } else {
        error!("{err}");
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

pub(crate) fn db_status(err: DbErr) -> StatusCode {
    error!("Database error: {err}");
    StatusCode::INTERNAL_SERVER_ERROR
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::military_time::InvalidTimeValue;

    #[test]
    fn test_schedule_status() {
        assert_eq!(
            schedule_status(ScheduleError::InvalidTimeValue(InvalidTimeValue::OutOfRange(2400))),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            schedule_status(ScheduleError::InvalidTimeRange {
                course: "CS 101-A".to_string(),
                start: 1000,
                end: 900
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            schedule_status(ScheduleError::GuidelineLookupFailed("timeout".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
