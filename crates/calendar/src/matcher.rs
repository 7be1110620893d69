use crate::{error::ScheduleError, layout::resolve_span};
use futures::future::try_join_all;
use log::info;
use models::{
    course::CourseOccurrence,
    guideline::{Guideline, GuidelineQuery},
    semester::Semester,
};
use serde::Serialize;
use std::future::Future;

/// A store of guidelines that can count the records accepting a profile
pub trait GuidelineLookup {
    fn count_matching(
        &self,
        query: &GuidelineQuery,
    ) -> impl Future<Output = Result<u64, ScheduleError>> + Send;
}

/// Guidelines held in memory
#[derive(Debug, Clone, Default)]
pub struct GuidelineSet(Vec<Guideline>);

impl GuidelineSet {
    pub fn new(guidelines: Vec<Guideline>) -> Self {
        Self(guidelines)
    }

    pub fn push(&mut self, guideline: Guideline) {
        self.0.push(guideline);
    }
}

impl GuidelineLookup for GuidelineSet {
    async fn count_matching(&self, query: &GuidelineQuery) -> Result<u64, ScheduleError> {
        Ok(self.0.iter().filter(|g| g.permits(query)).count() as u64)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Also require the course's times to fit a guideline's time window
    pub enforce_time_window: bool,
}

/// A course together with its guideline verdict
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedCourse {
    #[serde(flatten)]
    pub course: CourseOccurrence,
    pub within_guideline: bool,
}

/// Builds the guideline query describing a course's weekly meeting profile
pub fn guideline_query(
    course: &CourseOccurrence,
    semester: Semester,
    options: MatchOptions,
) -> Result<GuidelineQuery, ScheduleError> {
    let span = if options.enforce_time_window {
        let mut span = None;
        for meeting in &course.meetings {
            if let Some(time) = resolve_span(course, meeting)? {
                span = Some(match span {
                    None => (time.start, time.end),
                    Some((start, end)) => (
                        std::cmp::min_by_key(start, time.start, |t| t.total_minutes),
                        std::cmp::max_by_key(end, time.end, |t| t.total_minutes),
                    ),
                });
            }
        }
        span
    } else {
        None
    };

    Ok(GuidelineQuery {
        credits: course.credits,
        meeting_amount: course.total_meetings() as u32,
        required_days: course.meeting_days(),
        semester,
        span,
    })
}

/// Decides whether courses fall within institutional guidelines
#[derive(Debug, Clone)]
pub struct GuidelineMatcher<L> {
    lookup: L,
    options: MatchOptions,
}

impl<L: GuidelineLookup + Sync> GuidelineMatcher<L> {
    pub fn new(lookup: L) -> Self {
        Self {
            lookup,
            options: MatchOptions::default(),
        }
    }

    pub fn with_options(lookup: L, options: MatchOptions) -> Self {
        Self { lookup, options }
    }

    /// Whether at least one guideline accepts the course in the viewed semester.
    ///
    /// Lookup errors are returned as-is; no verdict is assumed.
    pub async fn is_within_guideline(
        &self,
        course: &CourseOccurrence,
        semester: Semester,
    ) -> Result<bool, ScheduleError> {
        let query = guideline_query(course, semester, self.options)?;
        let count = self.lookup.count_matching(&query).await?;

        Ok(count > 0)
    }

    /// Checks every course concurrently and returns them in their original order
    pub async fn annotate(
        &self,
        courses: Vec<CourseOccurrence>,
        semester: Semester,
    ) -> Result<Vec<AnnotatedCourse>, ScheduleError> {
        let checks = courses
            .iter()
            .map(|course| self.is_within_guideline(course, semester));
        let verdicts = try_join_all(checks).await?;

        let annotated: Vec<AnnotatedCourse> = courses
            .into_iter()
            .zip(verdicts)
            .map(|(course, within_guideline)| AnnotatedCourse {
                course,
                within_guideline,
            })
            .collect();

        info!(
            "Annotated {} courses for {semester}, {} within guidelines",
            annotated.len(),
            annotated.iter().filter(|c| c.within_guideline).count()
        );

        Ok(annotated)
    }
}
