pub mod course;
pub mod index;
pub mod term;
