use crate::{
    days::DaySet,
    military_time::MilitaryTime,
    semester::{Semester, SemesterSet},
};
use serde::{Deserialize, Serialize};

/// Bounds a guideline places on when a course may meet, as military times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: i32,
    pub end: i32,
}

impl TimeWindow {
    /// True when `[start, end]` fits inside the window
    pub fn contains(&self, start: MilitaryTime, end: MilitaryTime) -> bool {
        self.start <= i32::from(start.value()) && i32::from(end.value()) <= self.end
    }
}

/// An institutional rule for an acceptable credit/meeting/day combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guideline {
    pub credits: u8,
    pub meeting_amount: u32,
    pub days: DaySet,
    pub allowed_semesters: SemesterSet,
    #[serde(default)]
    pub time_window: Option<TimeWindow>,
}

/// The meeting profile of one course, used to look guidelines up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuidelineQuery {
    pub credits: u8,
    pub meeting_amount: u32,
    pub required_days: DaySet,
    pub semester: Semester,
    /// Earliest start and latest end, only set when time windows are enforced
    pub span: Option<(MilitaryTime, MilitaryTime)>,
}

impl Guideline {
    /// Whether this guideline accepts the queried profile.
    ///
    /// Days are a subset check: every day the course uses must be allowed,
    /// but the guideline may allow more.
    pub fn permits(&self, query: &GuidelineQuery) -> bool {
        let window_ok = match (self.time_window, query.span) {
            (Some(window), Some((start, end))) => window.contains(start, end),
            _ => true,
        };

        self.allowed_semesters.contains(query.semester)
            && self.credits == query.credits
            && self.meeting_amount == query.meeting_amount
            && self.days.contains(query.required_days)
            && window_ok
    }
}
