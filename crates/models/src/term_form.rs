use crate::{
    course_form::UNASSIGNED,
    validation::{ValidationError, required},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Textual format of term start and end dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw term form submission, with dates as `YYYY-MM-DD`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct TermForm {
    pub term_name: String,
    pub start_date: String,
    pub end_date: String,
}

/// Validated term fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermFields {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl TermForm {
    pub fn validate(self) -> Result<TermFields, ValidationError> {
        let name = required("term_name", self.term_name)?;
        if name == UNASSIGNED {
            return Err(ValidationError::ReservedTermName);
        }

        let start_date = parse_date("start_date", &self.start_date)?;
        let end_date = parse_date("end_date", &self.end_date)?;
        if start_date > end_date {
            return Err(ValidationError::InvalidDateRange {
                start: start_date.to_string(),
                end: end_date.to_string(),
            });
        }

        Ok(TermFields {
            name,
            start_date,
            end_date,
        })
    }
}

fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::MissingField(field));
    }

    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        field,
        value: raw.to_string(),
    })
}
