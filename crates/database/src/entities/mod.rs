pub mod course;
pub mod term;
pub mod term_course;

pub use course as courses;
pub use term as terms;
pub use term_course as term_courses;
