use crate::{
    error::ScheduleError,
    grid::GridConfig,
    indent::{GreedyStackIndent, IndentStrategy},
};
use log::debug;
use models::{
    course::{CourseOccurrence, MeetingOccurrence, TimeSpan},
    military_time::MilitaryTime,
};
use serde::Serialize;
use std::collections::HashMap;

/// One course meeting placed inside a block
#[derive(Debug, Clone, Serialize)]
pub struct BlockMember<'a> {
    pub course: &'a CourseOccurrence,
    pub meeting: &'a MeetingOccurrence,
    pub span: TimeSpan,
    pub duration_minutes: u16,
    /// Pixel height of this member's own duration
    pub height: f32,
}

/// Meetings of one weekday that share a start time
#[derive(Debug, Clone, Serialize)]
pub struct LayoutBlock<'a> {
    /// Minutes since midnight
    pub start_time: u16,
    /// Latest end among the members, minutes since midnight
    pub block_end_time: u16,
    pub top_offset: f32,
    pub height: f32,
    pub indent_level: usize,
    /// Longest meeting first
    pub members: Vec<BlockMember<'a>>,
}

impl<'a> LayoutBlock<'a> {
    fn seed(member: BlockMember<'a>) -> Self {
        Self {
            start_time: member.span.start.total_minutes,
            block_end_time: member.span.end.total_minutes,
            top_offset: 0.0,
            height: 0.0,
            indent_level: 0,
            members: vec![member],
        }
    }

    fn push(&mut self, member: BlockMember<'a>) {
        self.block_end_time = self.block_end_time.max(member.span.end.total_minutes);
        self.members.push(member);
    }

    /// True when this block is still running at `minutes`
    pub fn is_active_at(&self, minutes: u16) -> bool {
        self.start_time <= minutes && minutes < self.block_end_time
    }
}

/// Lays one weekday's meetings out on the week-view grid
#[derive(Debug, Clone)]
pub struct LayoutEngine<S = GreedyStackIndent> {
    grid: GridConfig,
    indent: S,
}

impl LayoutEngine {
    pub fn new(grid: GridConfig) -> Self {
        Self {
            grid,
            indent: GreedyStackIndent,
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}

impl<S: IndentStrategy> LayoutEngine<S> {
    pub fn with_strategy(grid: GridConfig, indent: S) -> Self {
        Self { grid, indent }
    }

    /// Lays out every meeting of the given courses.
    ///
    /// The caller has already narrowed the courses to a single weekday.
    pub fn layout_day<'a>(
        &self,
        courses: &'a [CourseOccurrence],
    ) -> Result<Vec<LayoutBlock<'a>>, ScheduleError> {
        self.layout_meetings(
            courses
                .iter()
                .flat_map(|course| course.meetings.iter().map(move |meeting| (course, meeting))),
        )
    }

    /// Lays out explicit course/meeting pairs, in the order given.
    ///
    /// # Returns
    /// Blocks sorted by ascending start time. Online and untimed meetings
    /// are left out.
    pub fn layout_meetings<'a, I>(&self, entries: I) -> Result<Vec<LayoutBlock<'a>>, ScheduleError>
    where
        I: IntoIterator<Item = (&'a CourseOccurrence, &'a MeetingOccurrence)>,
    {
        let mut blocks = self.group_by_start(entries)?;

        for block in &mut blocks {
            // Stable, so equal durations keep input order
            block
                .members
                .sort_by(|a, b| b.duration_minutes.cmp(&a.duration_minutes));
        }

        blocks.sort_by_key(|block| block.start_time);
        self.indent.assign_indents(&mut blocks);
        blocks.sort_by_key(|block| block.start_time);

        for block in &mut blocks {
            block.top_offset = self.grid.top_offset(block.start_time);
            block.height = self.grid.height(block.block_end_time - block.start_time);
        }

        debug!(
            "Laid out {} blocks, max indent {}",
            blocks.len(),
            blocks.iter().map(|b| b.indent_level).max().unwrap_or(0)
        );

        Ok(blocks)
    }

    /// Groups meetings with an identical start time, keeping first-seen order
    fn group_by_start<'a, I>(&self, entries: I) -> Result<Vec<LayoutBlock<'a>>, ScheduleError>
    where
        I: IntoIterator<Item = (&'a CourseOccurrence, &'a MeetingOccurrence)>,
    {
        let mut blocks: Vec<LayoutBlock<'a>> = Vec::new();
        let mut by_start: HashMap<u16, usize> = HashMap::new();

        for (course, meeting) in entries {
            let Some(span) = resolve_span(course, meeting)? else {
                debug!("Skipping untimed meeting of {}", course.label());
                continue;
            };

            let duration_minutes = span.duration_minutes();
            let member = BlockMember {
                course,
                meeting,
                span,
                duration_minutes,
                height: self.grid.height(duration_minutes),
            };

            match by_start.get(&span.start.total_minutes) {
                Some(&idx) => blocks[idx].push(member),
                None => {
                    by_start.insert(span.start.total_minutes, blocks.len());
                    blocks.push(LayoutBlock::seed(member));
                }
            }
        }

        Ok(blocks)
    }
}

/// Normalizes a meeting's times, or `None` when it has no place on the grid
pub fn resolve_span(
    course: &CourseOccurrence,
    meeting: &MeetingOccurrence,
) -> Result<Option<TimeSpan>, ScheduleError> {
    let Some((start, end)) = meeting.raw_times() else {
        return Ok(None);
    };

    let span = TimeSpan::new(MilitaryTime::new(start)?, MilitaryTime::new(end)?);

    span.map(Some).ok_or_else(|| ScheduleError::InvalidTimeRange {
        course: course.label(),
        start,
        end,
    })
}
