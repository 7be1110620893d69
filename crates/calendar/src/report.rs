use crate::matcher::AnnotatedCourse;
use models::{course::CourseState, semester::Semester};
use serde::Serialize;

/// Guideline compliance summary for one semester
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidelineReport {
    pub semester: Semester,
    pub total: usize,
    pub within: usize,
    /// Labels of the courses outside every guideline, in schedule order
    pub outside: Vec<String>,
}

impl GuidelineReport {
    /// Summarizes annotated courses, leaving out courses marked as removed
    pub fn from_annotated(semester: Semester, courses: &[AnnotatedCourse]) -> Self {
        let active = courses
            .iter()
            .filter(|c| c.course.state != CourseState::Removed);

        let mut total = 0;
        let mut within = 0;
        let mut outside = Vec::new();

        for annotated in active {
            total += 1;
            if annotated.within_guideline {
                within += 1;
            } else {
                outside.push(annotated.course.label());
            }
        }

        Self {
            semester,
            total,
            within,
            outside,
        }
    }

    /// Share of courses within guidelines; 1.0 for an empty schedule
    pub fn compliance_ratio(&self) -> f32 {
        if self.total == 0 {
            1.0
        } else {
            self.within as f32 / self.total as f32
        }
    }
}
