use thiserror::Error;

/// Reasons a submitted course or term form is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was missing or blank
    #[error("{0} is required")]
    MissingField(&'static str),
    /// Credits were given but are not a non-negative whole number
    #[error("course_credits must be a non-negative whole number, got {0:?}")]
    InvalidCredits(String),
    /// A date field does not match `YYYY-MM-DD`
    #[error("{field} must be a date in YYYY-MM-DD format, got {value:?}")]
    InvalidDate { field: &'static str, value: String },
    /// The term ends before it starts
    #[error("start_date {start} is after end_date {end}")]
    InvalidDateRange { start: String, end: String },
    /// The term name collides with the sentinel used for unassigned courses
    #[error(
        "term_name {:?} is reserved for unassigned courses",
        crate::course_form::UNASSIGNED
    )]
    ReservedTermName,
}

/// Returns the value if it has any non-whitespace content
pub(crate) fn required(field: &'static str, value: String) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(value)
    }
}
