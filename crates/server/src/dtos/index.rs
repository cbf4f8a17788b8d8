use super::{course::CourseResponse, term::TermResponse};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct IndexResponse {
    pub terms: Vec<TermResponse>,
    pub courses: Vec<CourseResponse>,
}
