use crate::{
    dtos::{course::CourseResponse, index::IndexResponse, term::TermResponse},
    error::AppError,
    state::AppState,
};
use axum::{Json, extract::State};
use database::services::{course::CourseService, term::TermService};

/// List all terms and all courses
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Terms and courses", body = IndexResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Planner"
)]
pub async fn index(State(state): State<AppState>) -> Result<Json<IndexResponse>, AppError> {
    let terms = TermService::list_all(&state.db).await?;
    let courses = CourseService::list_all(&state.db).await?;

    Ok(Json(IndexResponse {
        terms: terms.into_iter().map(TermResponse::from).collect(),
        courses: courses.into_iter().map(CourseResponse::from).collect(),
    }))
}
