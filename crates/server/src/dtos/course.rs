use database::entities::courses;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseResponse {
    pub id: String,
    pub subject: String,
    pub code: String,
    pub title: String,
    pub description: String,
    pub credits: Option<i32>,
    /// Term name, or "Unassigned"
    pub term: String,
}

impl From<courses::Model> for CourseResponse {
    fn from(course: courses::Model) -> Self {
        Self {
            id: course.id.to_string(),
            subject: course.subject,
            code: course.code,
            title: course.title,
            description: course.description,
            credits: course.credits,
            term: course.term,
        }
    }
}

/// Data behind the new and edit course forms
#[derive(Debug, Serialize, ToSchema)]
pub struct CourseFormView {
    pub title: String,
    /// The course being edited, absent for a new course
    pub course: Option<CourseResponse>,
    /// Names a course can be assigned to
    pub terms: Vec<String>,
    /// Value to submit for a course without a term
    pub unassigned: String,
}
