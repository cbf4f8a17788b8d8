use super::course::CourseResponse;
use chrono::NaiveDate;
use database::{entities::terms, services::term::TermWithCourses};
use sea_orm::prelude::Uuid;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct TermResponse {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Course ids in the order they were added
    pub courses: Vec<String>,
}

impl From<(terms::Model, Vec<Uuid>)> for TermResponse {
    fn from((term, course_ids): (terms::Model, Vec<Uuid>)) -> Self {
        Self {
            id: term.id.to_string(),
            name: term.name,
            start_date: term.start_date,
            end_date: term.end_date,
            courses: course_ids.iter().map(Uuid::to_string).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TermDetailResponse {
    pub term: TermResponse,
    pub course_details: Vec<CourseResponse>,
}

impl From<TermWithCourses> for TermDetailResponse {
    fn from(found: TermWithCourses) -> Self {
        Self {
            term: TermResponse::from((found.term, found.course_ids)),
            course_details: found.courses.into_iter().map(CourseResponse::from).collect(),
        }
    }
}

/// Data behind the new and edit term forms
#[derive(Debug, Serialize, ToSchema)]
pub struct TermFormView {
    pub title: String,
    /// The term being edited, absent for a new term
    pub term: Option<TermResponse>,
}
