use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::error::ServiceError;
use log::error;
use models::validation::ValidationError;
use sea_orm::DbErr;
use serde_json::json;

/// Handler error, rendered as a status code and a JSON `{"error": ...}` body
#[derive(Debug)]
pub struct AppError(ServiceError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ServiceError::NotFound { .. } => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) | ServiceError::UnknownTerm(_) => StatusCode::BAD_REQUEST,
            ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self(ServiceError::Validation(err))
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        Self(ServiceError::Database(err))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self.0 {
            ServiceError::Database(err) => {
                error!("Database error: {err}");
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
