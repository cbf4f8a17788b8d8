pub mod course;
pub mod health;
pub mod root;
pub mod term;

use crate::{doc::ApiDoc, state::AppState};
use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Builds the application router around an already connected database
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root::index))
        .route("/health", get(health::health))
        .route("/terms", post(term::create_term))
        .route("/terms/new", get(term::new_term))
        .route("/terms/{term_id}", get(term::show_term).post(term::update_term))
        .route("/terms/{term_id}/edit", get(term::edit_term))
        .route("/terms/{term_id}/delete", post(term::delete_term))
        .route("/terms/courses", post(course::create_course))
        .route("/terms/courses/new", get(course::new_course))
        .route(
            "/terms/courses/{course_id}",
            get(course::show_course).post(course::update_course),
        )
        .route("/terms/courses/{course_id}/edit", get(course::edit_course))
        .route(
            "/terms/courses/{course_id}/delete",
            post(course::delete_course),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{Body, to_bytes},
        http::{Request, StatusCode, header},
        response::Response,
    };
    use database::db::create_connection;
    use migration::{Migrator, MigratorTrait};
    use serde_json::Value;
    use tower::ServiceExt;

    const FALL_2024: &str = "term_name=Fall+2024&start_date=2024-09-01&end_date=2024-12-15";
    const CS_101: &str = "course_subject=CS&course_code=101&course_title=Intro\
        &course_description=Programming+basics&course_credits=4&course_term=Fall+2024";

    async fn app() -> Router {
        let db = create_connection("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        router(AppState::new(db))
    }

    async fn get_uri(app: &Router, uri: &str) -> Response {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    async fn post_form(app: &Router, uri: &str, body: &str) -> Response {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap();
        app.clone().oneshot(request).await.unwrap()
    }

    async fn json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn location(response: &Response) -> String {
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        response.headers()[header::LOCATION]
            .to_str()
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn test_term_and_course_scenario() {
        let app = app().await;

        let term_url = location(&post_form(&app, "/terms", FALL_2024).await);
        assert!(term_url.starts_with("/terms/"));

        let course_url = location(&post_form(&app, "/terms/courses", CS_101).await);
        assert!(course_url.starts_with("/terms/courses/"));
        let course_id = course_url.trim_start_matches("/terms/courses/");

        let course = json(get_uri(&app, &course_url).await).await;
        assert_eq!(course["id"], course_id);
        assert_eq!(course["subject"], "CS");
        assert_eq!(course["code"], "101");
        assert_eq!(course["title"], "Intro");
        assert_eq!(course["description"], "Programming basics");
        assert_eq!(course["credits"], 4);
        assert_eq!(course["term"], "Fall 2024");

        let response = get_uri(&app, &term_url).await;
        assert_eq!(response.status(), StatusCode::OK);
        let term = json(response).await;
        assert_eq!(term["term"]["name"], "Fall 2024");
        assert_eq!(term["term"]["start_date"], "2024-09-01");
        assert_eq!(term["term"]["end_date"], "2024-12-15");
        assert_eq!(term["term"]["courses"], serde_json::json!([course_id]));
        assert_eq!(term["course_details"][0]["title"], "Intro");

        let index = json(get_uri(&app, "/").await).await;
        assert_eq!(index["terms"].as_array().unwrap().len(), 1);
        assert_eq!(index["courses"][0]["id"], course_id);
    }

    #[tokio::test]
    async fn test_forms() {
        let app = app().await;
        post_form(&app, "/terms", FALL_2024).await;

        let new_course = json(get_uri(&app, "/terms/courses/new").await).await;
        assert_eq!(new_course["title"], "New Course");
        assert_eq!(new_course["course"], Value::Null);
        assert_eq!(new_course["terms"], serde_json::json!(["Fall 2024"]));
        assert_eq!(new_course["unassigned"], "Unassigned");

        let course_url = location(&post_form(&app, "/terms/courses", CS_101).await);
        let edit_course = json(get_uri(&app, &format!("{course_url}/edit")).await).await;
        assert_eq!(edit_course["title"], "Edit Course");
        assert_eq!(edit_course["course"]["code"], "101");

        let new_term = json(get_uri(&app, "/terms/new").await).await;
        assert_eq!(new_term["title"], "New Term");

        let terms = json(get_uri(&app, "/").await).await;
        let term_id = terms["terms"][0]["id"].as_str().unwrap().to_string();
        let edit_term = json(get_uri(&app, &format!("/terms/{term_id}/edit")).await).await;
        assert_eq!(edit_term["title"], "Edit Term");
        assert_eq!(edit_term["term"]["name"], "Fall 2024");
    }

    #[tokio::test]
    async fn test_update_course_redirects_and_replaces() {
        let app = app().await;
        post_form(&app, "/terms", FALL_2024).await;
        let course_url = location(&post_form(&app, "/terms/courses", CS_101).await);

        let update = "course_subject=CS&course_code=110&course_title=Principles";
        let response = post_form(&app, &course_url, update).await;
        assert_eq!(location(&response), course_url);

        let course = json(get_uri(&app, &course_url).await).await;
        assert_eq!(course["code"], "110");
        assert_eq!(course["title"], "Principles");
        assert_eq!(course["description"], "");
        assert_eq!(course["credits"], Value::Null);
        assert_eq!(course["term"], "Unassigned");
    }

    #[tokio::test]
    async fn test_update_term_redirects_and_renames_courses() {
        let app = app().await;
        let term_url = location(&post_form(&app, "/terms", FALL_2024).await);
        let course_url = location(&post_form(&app, "/terms/courses", CS_101).await);

        let update = "term_name=Autumn+2024&start_date=2024-08-26&end_date=2024-12-13";
        let response = post_form(&app, &term_url, update).await;
        assert_eq!(location(&response), term_url);

        let term = json(get_uri(&app, &term_url).await).await;
        assert_eq!(term["term"]["name"], "Autumn 2024");
        assert_eq!(term["term"]["start_date"], "2024-08-26");
        assert_eq!(term["course_details"][0]["term"], "Autumn 2024");

        let course = json(get_uri(&app, &course_url).await).await;
        assert_eq!(course["term"], "Autumn 2024");

        let unknown = "/terms/3f1c2a8e-5b7d-4e0a-9c6f-2d8b1e4a7c90";
        let missing = post_form(&app, unknown, FALL_2024).await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let backwards = "term_name=Fall+2024&start_date=2024-12-15&end_date=2024-09-01";
        let invalid = post_form(&app, &term_url, backwards).await;
        assert_eq!(invalid.status(), StatusCode::BAD_REQUEST);

        let term = json(get_uri(&app, &term_url).await).await;
        assert_eq!(term["term"]["name"], "Autumn 2024");
    }

    #[tokio::test]
    async fn test_delete_course_and_term() {
        let app = app().await;
        let term_url = location(&post_form(&app, "/terms", FALL_2024).await);
        let course_url = location(&post_form(&app, "/terms/courses", CS_101).await);

        let deleted = post_form(&app, &format!("{course_url}/delete"), "").await;
        assert_eq!(location(&deleted), "/");
        assert_eq!(get_uri(&app, &course_url).await.status(), StatusCode::NOT_FOUND);

        let term = json(get_uri(&app, &term_url).await).await;
        assert_eq!(term["term"]["courses"], serde_json::json!([]));

        let other_course = location(&post_form(&app, "/terms/courses", CS_101).await);
        let deleted = post_form(&app, &format!("{term_url}/delete"), "").await;
        assert_eq!(location(&deleted), "/");
        assert_eq!(get_uri(&app, &term_url).await.status(), StatusCode::NOT_FOUND);

        let course = json(get_uri(&app, &other_course).await).await;
        assert_eq!(course["term"], "Unassigned");
    }

    #[tokio::test]
    async fn test_error_responses() {
        let app = app().await;

        let missing = get_uri(&app, "/terms/courses/3f1c2a8e-5b7d-4e0a-9c6f-2d8b1e4a7c90").await;
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);

        let malformed = get_uri(&app, "/terms/not-a-term-id").await;
        assert_eq!(malformed.status(), StatusCode::NOT_FOUND);
        let body = json(malformed).await;
        assert_eq!(body["error"], "term not-a-term-id not found");

        let unknown_term = post_form(&app, "/terms/courses", CS_101).await;
        assert_eq!(unknown_term.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json(unknown_term).await["error"], "no term named \"Fall 2024\"");

        let missing_title =
            post_form(&app, "/terms/courses", "course_subject=CS&course_code=101").await;
        assert_eq!(missing_title.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json(missing_title).await["error"], "course_title is required");

        let bad_date = "term_name=Fall&start_date=Sept+1&end_date=2024-12-15";
        let bad_date = post_form(&app, "/terms", bad_date).await;
        assert_eq!(bad_date.status(), StatusCode::BAD_REQUEST);

        let reserved = "term_name=Unassigned&start_date=2024-09-01&end_date=2024-12-15";
        let reserved = post_form(&app, "/terms", reserved).await;
        assert_eq!(reserved.status(), StatusCode::BAD_REQUEST);

        let index = json(get_uri(&app, "/").await).await;
        assert_eq!(index["terms"], serde_json::json!([]));
        assert_eq!(index["courses"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_health_and_docs() {
        let app = app().await;

        let health = get_uri(&app, "/health").await;
        assert_eq!(health.status(), StatusCode::OK);

        let docs = get_uri(&app, "/api-docs/openapi.json").await;
        assert_eq!(docs.status(), StatusCode::OK);
        let doc = json(docs).await;
        assert_eq!(doc["info"]["title"], "Course Planner API");
    }
}
