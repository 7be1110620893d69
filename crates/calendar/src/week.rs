use crate::{
    error::ScheduleError,
    indent::IndentStrategy,
    layout::{LayoutBlock, LayoutEngine},
};
use models::{
    course::{CourseOccurrence, MeetingOccurrence},
    days::Weekday,
};
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct DayLayout<'a> {
    pub day: Weekday,
    pub blocks: Vec<LayoutBlock<'a>>,
}

/// A full week view, one column per weekday
#[derive(Debug, Clone, Serialize)]
pub struct WeekLayout<'a> {
    /// Monday through Sunday
    pub days: Vec<DayLayout<'a>>,
    /// Courses with nothing to put on the grid (online or untimed)
    pub unscheduled: Vec<&'a CourseOccurrence>,
}

impl<'a> WeekLayout<'a> {
    /// Splits each course's meetings by weekday and lays every day out
    pub fn build<S>(
        engine: &LayoutEngine<S>,
        courses: &'a [CourseOccurrence],
    ) -> Result<Self, ScheduleError>
    where
        S: IndentStrategy + Sync,
    {
        // Days are independent, so lay them out in parallel
        let days = Weekday::all()
            .into_par_iter()
            .map(|day| {
                engine
                    .layout_meetings(meetings_on(courses, day))
                    .map(|blocks| DayLayout { day, blocks })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let unscheduled = courses
            .iter()
            .filter(|course| {
                course
                    .meetings
                    .iter()
                    .all(|meeting| meeting.raw_times().is_none() || meeting.days.is_empty())
            })
            .collect();

        Ok(Self { days, unscheduled })
    }

    pub fn day(&self, day: Weekday) -> Option<&DayLayout<'a>> {
        self.days.iter().find(|layout| layout.day == day)
    }
}

/// Every course/meeting pair that takes place on `day`
pub fn meetings_on(
    courses: &[CourseOccurrence],
    day: Weekday,
) -> impl Iterator<Item = (&CourseOccurrence, &MeetingOccurrence)> {
    courses.iter().flat_map(move |course| {
        course
            .meetings
            .iter()
            .filter(move |meeting| meeting.days.has(day))
            .map(move |meeting| (course, meeting))
    })
}
