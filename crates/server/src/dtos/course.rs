use models::{
    course::{CourseOccurrence, CourseState, MeetingOccurrence},
    days::DaySet,
    semester::Semester,
};
use serde::Deserialize;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct MeetingRequest {
    /// Day letters, Thursday is `R` and Sunday is `U`
    #[schema(example = "MWF")]
    pub days: String,
    /// Military time
    #[schema(example = 830)]
    pub start_time: Option<i32>,
    #[schema(example = 1020)]
    pub end_time: Option<i32>,
    #[serde(default)]
    pub is_online: bool,
    #[serde(default)]
    pub room_refs: Vec<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CourseRequest {
    #[schema(example = "CS")]
    pub subject: String,
    #[schema(example = "101")]
    pub course_number: String,
    #[schema(example = "A")]
    pub section: String,
    pub title: String,
    pub credits: u8,
    #[serde(default)]
    pub faculty_refs: Vec<String>,
    /// `ADDED`, `MODIFIED`, `REMOVED` or `UNMODIFIED` (the default)
    pub state: Option<String>,
    /// Semester name or code, e.g. `fall` or `F`
    #[schema(example = "fall")]
    pub semester: String,
    #[serde(default)]
    pub meetings: Vec<MeetingRequest>,
}

impl TryFrom<MeetingRequest> for MeetingOccurrence {
    type Error = String;

    fn try_from(request: MeetingRequest) -> Result<Self, Self::Error> {
        let days = DaySet::from_str(&request.days)
            .map_err(|_| format!("Invalid days pattern: {:?}", request.days))?;

        Ok(MeetingOccurrence {
            days,
            start_time: request.start_time,
            end_time: request.end_time,
            is_online: request.is_online,
            room_refs: request.room_refs,
        })
    }
}

impl TryFrom<CourseRequest> for CourseOccurrence {
    type Error = String;

    fn try_from(request: CourseRequest) -> Result<Self, Self::Error> {
        let semester = parse_semester(&request.semester)?;
        let state = match request.state.as_deref() {
            Some(state) => CourseState::from_str(state)
                .map_err(|_| format!("Invalid course state: {state:?}"))?,
            None => CourseState::default(),
        };
        let meetings = request
            .meetings
            .into_iter()
            .map(MeetingOccurrence::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CourseOccurrence {
            subject: request.subject,
            course_number: request.course_number,
            section: request.section,
            title: request.title,
            credits: request.credits,
            faculty_refs: request.faculty_refs,
            state,
            semester,
            meetings,
        })
    }
}

pub fn parse_semester(value: &str) -> Result<Semester, String> {
    Semester::from_str(value.trim()).map_err(|_| format!("Invalid semester: {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(state: Option<&str>, days: &str) -> CourseRequest {
        serde_json::from_value(serde_json::json!({
            "subject": "CS",
            "course_number": "101",
            "section": "A",
            "title": "Intro",
            "credits": 3,
            "state": state,
            "semester": "Fall",
            "meetings": [
                { "days": days, "start_time": 830, "end_time": 1000 },
                { "days": "F", "is_online": true }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_course_request_conversion() {
        let course = CourseOccurrence::try_from(request(Some("ADDED"), "MW")).unwrap();

        assert_eq!(course.label(), "CS 101-A");
        assert_eq!(course.semester, Semester::Fall);
        assert_eq!(course.state, CourseState::Added);
        assert_eq!(course.meetings.len(), 2);
        assert_eq!(course.meetings[0].raw_times(), Some((830, 1000)));
        assert!(course.meetings[1].is_online);
        assert_eq!(course.total_meetings(), 3);
    }

    #[test]
    fn test_state_defaults_to_unmodified() {
        let course = CourseOccurrence::try_from(request(None, "TR")).unwrap();
        assert_eq!(course.state, CourseState::Unmodified);
    }

    #[test]
    fn test_bad_fields_are_reported() {
        let err = CourseOccurrence::try_from(request(Some("ARCHIVED"), "MW")).unwrap_err();
        assert!(err.contains("ARCHIVED"));

        let err = CourseOccurrence::try_from(request(None, "MXZ")).unwrap_err();
        assert!(err.contains("MXZ"));
    }

    #[test]
    fn test_semester_codes_and_names() {
        assert_eq!(parse_semester("S"), Ok(Semester::Spring));
        assert_eq!(parse_semester("summer"), Ok(Semester::Summer));
        assert!(parse_semester("autumn").is_err());
    }
}
