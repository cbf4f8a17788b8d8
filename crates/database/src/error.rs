use models::validation::ValidationError;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// Failures of course and term operations
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The id is malformed or no row matches it
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A course named a term that does not exist
    #[error("no term named {0:?}")]
    UnknownTerm(String),

    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl ServiceError {
    pub(crate) fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Parses a path identifier, treating malformed ids the same as missing ones
pub fn parse_id(entity: &'static str, raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw).map_err(|_| ServiceError::not_found(entity, raw))
}
