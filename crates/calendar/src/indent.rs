use crate::layout::LayoutBlock;
use log::debug;

/// Chooses horizontal indent levels for blocks already sorted by start time
pub trait IndentStrategy {
    fn assign_indents(&self, blocks: &mut [LayoutBlock<'_>]);
}

/// Stack-depth heuristic: a block sits one level right of the most recently
/// placed block that is still running when it starts, or at level 0.
///
/// This is not an optimal interval coloring. With staggered overlaps it can
/// indent deeper than needed: while a deep block is still running, a new block
/// stacks on top of it even if a shallower level has already freed up.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyStackIndent;

impl IndentStrategy for GreedyStackIndent {
    fn assign_indents(&self, blocks: &mut [LayoutBlock<'_>]) {
        for placed in 0..blocks.len() {
            let start = blocks[placed].start_time;

            let indent = blocks[..placed]
                .iter()
                .rev()
                .find(|prev| prev.is_active_at(start))
                .map_or(0, |prev| prev.indent_level + 1);

            debug!("Block at minute {start} gets indent {indent}");
            blocks[placed].indent_level = indent;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{grid::GridConfig, layout::LayoutEngine};
    use models::{
        course::{CourseOccurrence, CourseState, MeetingOccurrence},
        days::DaySet,
        semester::Semester,
    };

    fn course(start: i32, end: i32) -> CourseOccurrence {
        CourseOccurrence {
            subject: "BIO".to_string(),
            course_number: format!("{start}"),
            section: "A".to_string(),
            title: "Lab".to_string(),
            credits: 4,
            faculty_refs: vec![],
            state: CourseState::Added,
            semester: Semester::Spring,
            meetings: vec![MeetingOccurrence {
                days: DaySet::TUESDAY,
                start_time: Some(start),
                end_time: Some(end),
                is_online: false,
                room_refs: vec!["SCI 120".to_string()],
            }],
        }
    }

    fn indents(courses: &[CourseOccurrence]) -> Vec<usize> {
        LayoutEngine::new(GridConfig::default())
            .layout_day(courses)
            .unwrap()
            .iter()
            .map(|block| block.indent_level)
            .collect()
    }

    #[test]
    fn test_nested_overlaps_stack() {
        let courses = vec![course(900, 1200), course(930, 1100), course(1000, 1030)];
        assert_eq!(indents(&courses), vec![0, 1, 2]);
    }

    #[test]
    fn test_staggered_overlap_over_indents() {
        // 8:00-12:00, 8:30-9:00, then 10:00 overlaps only the first block,
        // but the most recent block is scanned first and has ended, so the
        // scan reaches the 8:00 block and lands at level 1
        let courses = vec![course(800, 1200), course(830, 900), course(1000, 1100)];
        assert_eq!(indents(&courses), vec![0, 1, 1]);

        // Level 1 is free again at 9:30, but the 8:45 block is still running
        // at level 2, so the 9:30 block stacks on top of it at level 3
        let courses = vec![
            course(800, 1200),
            course(830, 900),
            course(845, 1000),
            course(930, 1000),
        ];
        assert_eq!(indents(&courses), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_custom_strategy_can_be_substituted() {
        struct Flat;

        impl IndentStrategy for Flat {
            fn assign_indents(&self, blocks: &mut [LayoutBlock<'_>]) {
                for block in blocks {
                    block.indent_level = 0;
                }
            }
        }

        let courses = vec![course(900, 1000), course(930, 1030)];
        let blocks = LayoutEngine::with_strategy(GridConfig::default(), Flat)
            .layout_day(&courses)
            .unwrap();

        assert!(blocks.iter().all(|block| block.indent_level == 0));
    }
}
