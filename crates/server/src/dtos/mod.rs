pub mod course;
pub mod guideline;
pub mod layout;
