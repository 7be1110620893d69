use crate::dtos::course::CourseRequest;
use calendar::{matcher::AnnotatedCourse, report::GuidelineReport};
use models::guideline::Guideline;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct AnnotateRequest {
    /// Semester being viewed; guidelines must allow it
    #[schema(example = "fall")]
    pub semester: String,
    pub courses: Vec<CourseRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnnotatedCourseResponse {
    #[schema(example = "CS 101-A")]
    pub course: String,
    pub title: String,
    pub credits: u8,
    pub state: String,
    #[schema(example = "MWF")]
    pub days: String,
    pub total_meetings: usize,
    pub within_guideline: bool,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GuidelineReportResponse {
    pub semester: String,
    pub total: usize,
    pub within: usize,
    pub outside: Vec<String>,
    pub compliance_ratio: f32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AnnotateResponse {
    pub courses: Vec<AnnotatedCourseResponse>,
    pub report: GuidelineReportResponse,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct GuidelineResponse {
    pub credits: u8,
    pub meeting_amount: u32,
    #[schema(example = "MWF")]
    pub days: String,
    pub semesters: Vec<String>,
    /// Military time
    pub window_start: Option<i32>,
    pub window_end: Option<i32>,
}

impl From<&AnnotatedCourse> for AnnotatedCourseResponse {
    fn from(annotated: &AnnotatedCourse) -> Self {
        let course = &annotated.course;
        Self {
            course: course.label(),
            title: course.title.clone(),
            credits: course.credits,
            state: course.state.as_ref().to_string(),
            days: course.meeting_days().to_string(),
            total_meetings: course.total_meetings(),
            within_guideline: annotated.within_guideline,
        }
    }
}

impl From<GuidelineReport> for GuidelineReportResponse {
    fn from(report: GuidelineReport) -> Self {
        Self {
            semester: report.semester.to_string(),
            total: report.total,
            within: report.within,
            compliance_ratio: report.compliance_ratio(),
            outside: report.outside,
        }
    }
}

impl From<Guideline> for GuidelineResponse {
    fn from(guideline: Guideline) -> Self {
        Self {
            credits: guideline.credits,
            meeting_amount: guideline.meeting_amount,
            days: guideline.days.to_string(),
            semesters: guideline
                .allowed_semesters
                .iter()
                .map(|semester| semester.to_string())
                .collect(),
            window_start: guideline.time_window.map(|window| window.start),
            window_end: guideline.time_window.map(|window| window.end),
        }
    }
}
