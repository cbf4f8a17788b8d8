use crate::{
    dtos::term::{TermDetailResponse, TermFormView, TermResponse},
    error::AppError,
    state::AppState,
};
use axum::{
    Form, Json,
    extract::{Path, State},
    response::Redirect,
};
use database::services::term::TermService;
use models::term_form::TermForm;

fn term_url(term_id: impl std::fmt::Display) -> String {
    format!("/terms/{term_id}")
}

/// Form data for creating a term
#[utoipa::path(
    get,
    path = "/terms/new",
    responses(
        (status = 200, description = "Empty term form", body = TermFormView)
    ),
    tag = "Terms"
)]
pub async fn new_term() -> Json<TermFormView> {
    Json(TermFormView {
        title: "New Term".to_string(),
        term: None,
    })
}

/// Create a term with an empty course list
#[utoipa::path(
    post,
    path = "/terms",
    request_body(content = TermForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Term created, redirects to the term"),
        (status = 400, description = "Invalid form"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Terms"
)]
pub async fn create_term(
    State(state): State<AppState>,
    Form(form): Form<TermForm>,
) -> Result<Redirect, AppError> {
    let fields = form.validate()?;
    let term_id = TermService::create(&state.db, fields).await?;

    Ok(Redirect::to(&term_url(term_id)))
}

/// Get a term and its courses
#[utoipa::path(
    get,
    path = "/terms/{term_id}",
    params(
        ("term_id" = String, Path, description = "Term ID")
    ),
    responses(
        (status = 200, description = "Term found", body = TermDetailResponse),
        (status = 404, description = "Term not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Terms"
)]
pub async fn show_term(
    State(state): State<AppState>,
    Path(term_id): Path<String>,
) -> Result<Json<TermDetailResponse>, AppError> {
    let found = TermService::get(&state.db, &term_id).await?;

    Ok(Json(TermDetailResponse::from(found)))
}

/// Replace a term's name and dates
#[utoipa::path(
    post,
    path = "/terms/{term_id}",
    params(
        ("term_id" = String, Path, description = "Term ID")
    ),
    request_body(content = TermForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Term updated, redirects to the term"),
        (status = 400, description = "Invalid form"),
        (status = 404, description = "Term not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Terms"
)]
pub async fn update_term(
    State(state): State<AppState>,
    Path(term_id): Path<String>,
    Form(form): Form<TermForm>,
) -> Result<Redirect, AppError> {
    let fields = form.validate()?;
    let term = TermService::update(&state.db, &term_id, fields).await?;

    Ok(Redirect::to(&term_url(term.id)))
}

/// Form data for editing a term
#[utoipa::path(
    get,
    path = "/terms/{term_id}/edit",
    params(
        ("term_id" = String, Path, description = "Term ID")
    ),
    responses(
        (status = 200, description = "Term form filled with the current values", body = TermFormView),
        (status = 404, description = "Term not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Terms"
)]
pub async fn edit_term(
    State(state): State<AppState>,
    Path(term_id): Path<String>,
) -> Result<Json<TermFormView>, AppError> {
    let found = TermService::get(&state.db, &term_id).await?;

    Ok(Json(TermFormView {
        title: "Edit Term".to_string(),
        term: Some(TermResponse::from((found.term, found.course_ids))),
    }))
}

/// Delete a term; its courses become unassigned
#[utoipa::path(
    post,
    path = "/terms/{term_id}/delete",
    params(
        ("term_id" = String, Path, description = "Term ID")
    ),
    responses(
        (status = 303, description = "Term deleted, redirects to the index"),
        (status = 404, description = "Term not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Terms"
)]
pub async fn delete_term(
    State(state): State<AppState>,
    Path(term_id): Path<String>,
) -> Result<Redirect, AppError> {
    TermService::delete(&state.db, &term_id).await?;

    Ok(Redirect::to("/"))
}
