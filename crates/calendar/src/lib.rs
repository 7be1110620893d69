//! Week-view layout and guideline matching for course schedules.

pub mod error;
pub mod grid;
pub mod indent;
pub mod layout;
pub mod matcher;
pub mod report;
pub mod week;

pub use error::ScheduleError;
pub use grid::GridConfig;
pub use layout::{BlockMember, LayoutBlock, LayoutEngine};
