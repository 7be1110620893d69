use crate::dtos::course::CourseRequest;
use calendar::{
    BlockMember, LayoutBlock,
    week::{DayLayout, WeekLayout},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct DayLayoutRequest {
    /// Only meetings on this day are placed; every meeting when absent
    #[schema(example = "monday")]
    pub day: Option<String>,
    pub courses: Vec<CourseRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct WeekLayoutRequest {
    pub courses: Vec<CourseRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MemberResponse {
    #[schema(example = "CS 101-A")]
    pub course: String,
    pub title: String,
    pub state: String,
    #[schema(example = "8:30 AM")]
    pub start: String,
    #[schema(example = "10:00 AM")]
    pub end: String,
    pub duration_minutes: u16,
    pub height: f32,
    pub room_refs: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BlockResponse {
    #[schema(example = "8:30 AM")]
    pub start: String,
    /// Minutes since midnight
    pub start_minutes: u16,
    pub end_minutes: u16,
    pub top_offset: f32,
    pub height: f32,
    pub indent_level: usize,
    /// Longest meeting first
    pub members: Vec<MemberResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DayLayoutResponse {
    pub day: Option<String>,
    pub blocks: Vec<BlockResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WeekLayoutResponse {
    pub days: Vec<DayLayoutResponse>,
    /// Labels of courses with no timed, in-person meeting
    pub unscheduled: Vec<String>,
}

impl From<&BlockMember<'_>> for MemberResponse {
    fn from(member: &BlockMember<'_>) -> Self {
        Self {
            course: member.course.label(),
            title: member.course.title.clone(),
            state: member.course.state.as_ref().to_string(),
            start: member.span.start.to_string(),
            end: member.span.end.to_string(),
            duration_minutes: member.duration_minutes,
            height: member.height,
            room_refs: member.meeting.room_refs.clone(),
        }
    }
}

impl From<&LayoutBlock<'_>> for BlockResponse {
    fn from(block: &LayoutBlock<'_>) -> Self {
        Self {
            start: block
                .members
                .first()
                .map(|member| member.span.start.to_string())
                .unwrap_or_default(),
            start_minutes: block.start_time,
            end_minutes: block.block_end_time,
            top_offset: block.top_offset,
            height: block.height,
            indent_level: block.indent_level,
            members: block.members.iter().map(MemberResponse::from).collect(),
        }
    }
}

impl DayLayoutResponse {
    pub fn new(day: Option<String>, blocks: &[LayoutBlock<'_>]) -> Self {
        Self {
            day,
            blocks: blocks.iter().map(BlockResponse::from).collect(),
        }
    }
}

impl From<&DayLayout<'_>> for DayLayoutResponse {
    fn from(layout: &DayLayout<'_>) -> Self {
        Self::new(Some(layout.day.to_string()), &layout.blocks)
    }
}

impl From<&WeekLayout<'_>> for WeekLayoutResponse {
    fn from(week: &WeekLayout<'_>) -> Self {
        Self {
            days: week.days.iter().map(DayLayoutResponse::from).collect(),
            unscheduled: week.unscheduled.iter().map(|course| course.label()).collect(),
        }
    }
}
