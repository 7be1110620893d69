use crate::{days::DaySet, military_time::MilitaryTime, semester::Semester};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter, EnumString};

/// How a course differs from the previous revision of the schedule
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CourseState {
    Added,
    Modified,
    Removed,
    #[default]
    Unmodified,
}

/// Represents a time span for a meeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSpan {
    pub start: MilitaryTime,
    pub end: MilitaryTime,
}

impl TimeSpan {
    /// Creates a new `TimeSpan` if `start` is before `end`
    pub fn new(start: MilitaryTime, end: MilitaryTime) -> Option<Self> {
        (start.total_minutes < end.total_minutes).then_some(Self { start, end })
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.total_minutes - self.start.total_minutes
    }
}

/// One weekly recurring time block of a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingOccurrence {
    /// Days the meeting occurs
    pub days: DaySet,
    /// Start as military time (e.g. 830)
    pub start_time: Option<i32>,
    /// End as military time (e.g. 1020)
    pub end_time: Option<i32>,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub room_refs: Vec<String>,
}

impl MeetingOccurrence {
    /// Raw start/end pair, or `None` when the meeting has no place on a grid
    pub fn raw_times(&self) -> Option<(i32, i32)> {
        if self.is_online {
            return None;
        }

        self.start_time.zip(self.end_time)
    }
}

/// A course's identity plus its meetings for one semester
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseOccurrence {
    pub subject: String,
    pub course_number: String,
    pub section: String,
    pub title: String,
    pub credits: u8,
    #[serde(default)]
    pub faculty_refs: Vec<String>,
    #[serde(default)]
    pub state: CourseState,
    pub semester: Semester,
    #[serde(default)]
    pub meetings: Vec<MeetingOccurrence>,
}

impl CourseOccurrence {
    /// Every day the course meets at least once
    pub fn meeting_days(&self) -> DaySet {
        self.meetings
            .iter()
            .fold(DaySet::NONE, |days, meeting| days | meeting.days)
    }

    /// Weekly meeting count; a single MWF meeting counts three times
    pub fn total_meetings(&self) -> usize {
        self.meetings.iter().map(|meeting| meeting.days.len()).sum()
    }

    /// Short label such as `CS 101-A`
    pub fn label(&self) -> String {
        format!("{} {}-{}", self.subject, self.course_number, self.section)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;

    fn meeting(days: &str, start: i32, end: i32) -> MeetingOccurrence {
        MeetingOccurrence {
            days: DaySet::from_str(days).unwrap(),
            start_time: Some(start),
            end_time: Some(end),
            is_online: false,
            room_refs: vec![],
        }
    }

    fn course(meetings: Vec<MeetingOccurrence>) -> CourseOccurrence {
        CourseOccurrence {
            subject: "CS".to_string(),
            course_number: "101".to_string(),
            section: "A".to_string(),
            title: "Intro".to_string(),
            credits: 3,
            faculty_refs: vec![],
            state: CourseState::Unmodified,
            semester: Semester::Fall,
            meetings,
        }
    }

    #[test]
    fn test_meeting_profile() {
        let course = course(vec![meeting("MW", 900, 950), meeting("F", 1000, 1050)]);
        assert_eq!(course.meeting_days().to_string(), "MWF");
        assert_eq!(course.total_meetings(), 3);
    }

    #[test]
    fn test_overlapping_meeting_days_count_twice() {
        let course = course(vec![meeting("MW", 900, 950), meeting("W", 1400, 1550)]);
        assert_eq!(course.meeting_days().to_string(), "MW");
        assert_eq!(course.total_meetings(), 3);
    }

    #[test]
    fn test_raw_times() {
        let mut online = meeting("M", 900, 1000);
        online.is_online = true;
        assert_eq!(online.raw_times(), None);

        let mut untimed = meeting("M", 900, 1000);
        untimed.end_time = None;
        assert_eq!(untimed.raw_times(), None);

        assert_eq!(meeting("M", 900, 1000).raw_times(), Some((900, 1000)));
    }

    #[test]
    fn test_time_span() {
        let nine = MilitaryTime::new(900).unwrap();
        let ten = MilitaryTime::new(1000).unwrap();

        let span = TimeSpan::new(nine, ten).unwrap();
        assert_eq!(span.duration_minutes(), 60);
        assert!(TimeSpan::new(ten, nine).is_none());
        assert!(TimeSpan::new(nine, nine).is_none());
    }

    #[test]
    fn test_course_state_parsing() {
        assert_eq!(CourseState::from_str("ADDED").unwrap(), CourseState::Added);
        assert_eq!(CourseState::Unmodified.as_ref(), "UNMODIFIED");
        assert_eq!(course(vec![]).label(), "CS 101-A");
    }
}
