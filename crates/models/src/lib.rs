pub mod course_form;
pub mod term_form;
pub mod validation;
