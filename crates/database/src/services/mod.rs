pub mod course;
pub mod guideline;
