pub mod course;
pub mod guideline;
pub mod meeting;
