use crate::routes::{course, health, root, term};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        root::index,
        health::health,
        course::new_course,
        course::create_course,
        course::show_course,
        course::update_course,
        course::edit_course,
        course::delete_course,
        term::new_term,
        term::create_term,
        term::show_term,
        term::update_term,
        term::edit_term,
        term::delete_term
    ),
    tags(
        (name = "Planner", description = "Overview of terms and courses"),
        (name = "Courses", description = "Course related endpoints"),
        (name = "Terms", description = "Term related endpoints"),
        (name = "Health", description = "Service health"),
    ),
    info(
        title = "Course Planner API",
        version = "1.0.0",
        description = "Plan courses across academic terms",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
