pub mod association;
pub mod course;
pub mod term;
