use crate::{
    dtos::course::{CourseFormView, CourseResponse},
    error::AppError,
    state::AppState,
};
use axum::{
    Form, Json,
    extract::{Path, State},
    response::Redirect,
};
use database::services::{course::CourseService, term::TermService};
use models::course_form::{CourseForm, UNASSIGNED};

fn course_url(course_id: impl std::fmt::Display) -> String {
    format!("/terms/courses/{course_id}")
}

/// Form data for creating a course
#[utoipa::path(
    get,
    path = "/terms/courses/new",
    responses(
        (status = 200, description = "Empty course form", body = CourseFormView),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn new_course(State(state): State<AppState>) -> Result<Json<CourseFormView>, AppError> {
    let terms = TermService::names(&state.db).await?;

    Ok(Json(CourseFormView {
        title: "New Course".to_string(),
        course: None,
        terms,
        unassigned: UNASSIGNED.to_string(),
    }))
}

/// Create a course and add it to the term it names
#[utoipa::path(
    post,
    path = "/terms/courses",
    request_body(content = CourseForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Course created, redirects to the course"),
        (status = 400, description = "Invalid form or unknown term"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    Form(form): Form<CourseForm>,
) -> Result<Redirect, AppError> {
    let fields = form.validate()?;
    let course_id = CourseService::create(&state.db, fields).await?;

    Ok(Redirect::to(&course_url(course_id)))
}

/// Get a course by ID
#[utoipa::path(
    get,
    path = "/terms/courses/{course_id}",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseResponse),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn show_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseResponse>, AppError> {
    let course = CourseService::get(&state.db, &course_id).await?;

    Ok(Json(CourseResponse::from(course)))
}

/// Replace a course's fields and move it to the term it names
#[utoipa::path(
    post,
    path = "/terms/courses/{course_id}",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    request_body(content = CourseForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Course updated, redirects to the course"),
        (status = 400, description = "Invalid form or unknown term"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
    Form(form): Form<CourseForm>,
) -> Result<Redirect, AppError> {
    let fields = form.validate()?;
    let course = CourseService::update(&state.db, &course_id, fields).await?;

    Ok(Redirect::to(&course_url(course.id)))
}

/// Form data for editing a course
#[utoipa::path(
    get,
    path = "/terms/courses/{course_id}/edit",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course form filled with the current values", body = CourseFormView),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn edit_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Json<CourseFormView>, AppError> {
    let course = CourseService::get(&state.db, &course_id).await?;
    let terms = TermService::names(&state.db).await?;

    Ok(Json(CourseFormView {
        title: "Edit Course".to_string(),
        course: Some(CourseResponse::from(course)),
        terms,
        unassigned: UNASSIGNED.to_string(),
    }))
}

/// Delete a course and remove it from its term
#[utoipa::path(
    post,
    path = "/terms/courses/{course_id}/delete",
    params(
        ("course_id" = String, Path, description = "Course ID")
    ),
    responses(
        (status = 303, description = "Course deleted, redirects to the index"),
        (status = 404, description = "Course not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<String>,
) -> Result<Redirect, AppError> {
    CourseService::delete(&state.db, &course_id).await?;

    Ok(Redirect::to("/"))
}
