use crate::entities::{course, meeting};
use log::{debug, warn};
use models::{
    course::{CourseOccurrence, CourseState, MeetingOccurrence},
    days::{DaySet, Weekday},
    semester::Semester,
};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    prelude::Expr,
};
use std::{collections::HashMap, str::FromStr};
use uuid::Uuid;

pub struct CourseService;

impl CourseService {
    /// Get every course of a semester with all of its meetings
    pub async fn get_courses_for_semester(
        db: &DatabaseConnection,
        semester: Semester,
    ) -> Result<Vec<CourseOccurrence>, DbErr> {
        Self::get_courses(db, semester, Condition::all()).await
    }

    /// Get the courses meeting on `day`, keeping only that day's meetings
    pub async fn get_courses_for_day(
        db: &DatabaseConnection,
        semester: Semester,
        day: Weekday,
    ) -> Result<Vec<CourseOccurrence>, DbErr> {
        let day_bit = i16::from(DaySet::from(day).bits());
        let meeting_filter =
            Condition::all().add(Expr::cust_with_values("(meetings.days & $1) <> 0", [day_bit]));

        let mut courses = Self::get_courses(db, semester, meeting_filter).await?;
        courses.retain(|course| !course.meetings.is_empty());

        debug!("{} courses meet on {day} in {semester}", courses.len());
        Ok(courses)
    }

    async fn get_courses(
        db: &DatabaseConnection,
        semester: Semester,
        meeting_filter: Condition,
    ) -> Result<Vec<CourseOccurrence>, DbErr> {
        let courses = course::Entity::find()
            .filter(course::Column::Semester.eq(semester.as_str()))
            .order_by_asc(course::Column::Subject)
            .order_by_asc(course::Column::Number)
            .order_by_asc(course::Column::Section)
            .all(db)
            .await?;

        if courses.is_empty() {
            return Ok(vec![]);
        }

        let course_ids: Vec<Uuid> = courses.iter().map(|c| c.id).collect();

        // Batch fetch all meetings for all courses
        let meetings = meeting::Entity::find()
            .filter(meeting::Column::CourseId.is_in(course_ids))
            .filter(meeting_filter)
            .order_by_asc(meeting::Column::StartTime)
            .all(db)
            .await?;

        let mut meetings_by_course: HashMap<Uuid, Vec<meeting::Model>> = HashMap::new();
        for meeting in meetings {
            meetings_by_course
                .entry(meeting.course_id)
                .or_default()
                .push(meeting);
        }

        courses
            .into_iter()
            .map(|course| {
                let course_meetings = meetings_by_course.remove(&course.id).unwrap_or_default();
                to_occurrence(course, course_meetings)
            })
            .collect()
    }
}

/// Converts stored rows into a course occurrence
fn to_occurrence(
    course: course::Model,
    meetings: Vec<meeting::Model>,
) -> Result<CourseOccurrence, DbErr> {
    let state = CourseState::from_str(&course.state).map_err(|_| {
        warn!("Course {} has unknown state {}", course.id, course.state);
        DbErr::Type(format!("Invalid course state: {}", course.state))
    })?;
    let semester = Semester::from_str(&course.semester)
        .map_err(|_| DbErr::Type(format!("Invalid semester: {}", course.semester)))?;
    let credits = u8::try_from(course.credits)
        .map_err(|_| DbErr::Type(format!("Invalid credits: {}", course.credits)))?;

    let meetings = meetings
        .into_iter()
        .map(|meeting| MeetingOccurrence {
            days: meeting.days,
            start_time: meeting.start_time.map(i32::from),
            end_time: meeting.end_time.map(i32::from),
            is_online: meeting.is_online,
            room_refs: meeting.room_refs,
        })
        .collect();

    Ok(CourseOccurrence {
        subject: course.subject,
        course_number: course.number,
        section: course.section,
        title: course.title,
        credits,
        faculty_refs: course.faculty_refs,
        state,
        semester,
        meetings,
    })
}
