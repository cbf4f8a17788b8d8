use crate::validation::{ValidationError, required};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

/// Term value stored on courses that do not belong to any term
pub const UNASSIGNED: &str = "Unassigned";

/// Which term a course belongs to, by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermAssignment {
    Unassigned,
    Named(String),
}

impl TermAssignment {
    /// The term name to look up, if any
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Unassigned => None,
            Self::Named(name) => Some(name),
        }
    }
}

impl FromStr for TermAssignment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // An empty selection means the same as picking "Unassigned"
        if s.trim().is_empty() || s == UNASSIGNED {
            Ok(Self::Unassigned)
        } else {
            Ok(Self::Named(s.to_string()))
        }
    }
}

impl Display for TermAssignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Unassigned => write!(f, "{UNASSIGNED}"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}

/// Raw course form submission.
///
/// Every field defaults to an empty string so that omitted fields are reported
/// by [`CourseForm::validate`] instead of failing extraction.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(default)]
pub struct CourseForm {
    pub course_subject: String,
    pub course_code: String,
    pub course_title: String,
    pub course_description: String,
    pub course_credits: String,
    pub course_term: String,
}

/// Validated course fields, ready to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseFields {
    pub subject: String,
    pub code: String,
    pub title: String,
    pub description: String,
    pub credits: Option<i32>,
    pub term: TermAssignment,
}

impl CourseForm {
    pub fn validate(self) -> Result<CourseFields, ValidationError> {
        let subject = required("course_subject", self.course_subject)?;
        let code = required("course_code", self.course_code)?;
        let title = required("course_title", self.course_title)?;
        let credits = parse_credits(&self.course_credits)?;

        let Ok(term) = self.course_term.parse::<TermAssignment>();

        Ok(CourseFields {
            subject,
            code,
            title,
            description: self.course_description,
            credits,
            term,
        })
    }
}

fn parse_credits(raw: &str) -> Result<Option<i32>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    match raw.parse::<i32>() {
        Ok(credits) if credits >= 0 => Ok(Some(credits)),
        _ => Err(ValidationError::InvalidCredits(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CourseForm {
        CourseForm {
            course_subject: "CS".to_string(),
            course_code: "101".to_string(),
            course_title: "Intro".to_string(),
            course_description: "Programming basics".to_string(),
            course_credits: "4".to_string(),
            course_term: "Fall 2024".to_string(),
        }
    }

    #[test]
    fn test_validate_complete_form() {
        let fields = form().validate().unwrap();
        assert_eq!(fields.subject, "CS");
        assert_eq!(fields.code, "101");
        assert_eq!(fields.title, "Intro");
        assert_eq!(fields.description, "Programming basics");
        assert_eq!(fields.credits, Some(4));
        assert_eq!(fields.term, TermAssignment::Named("Fall 2024".to_string()));
    }

    #[test]
    fn test_validate_optional_fields() {
        let fields = CourseForm {
            course_description: String::new(),
            course_credits: " ".to_string(),
            course_term: String::new(),
            ..form()
        }
        .validate()
        .unwrap();

        assert_eq!(fields.description, "");
        assert_eq!(fields.credits, None);
        assert_eq!(fields.term, TermAssignment::Unassigned);
    }

    #[test]
    fn test_validate_missing_fields() {
        let missing_subject = CourseForm {
            course_subject: String::new(),
            ..form()
        };
        assert_eq!(
            missing_subject.validate(),
            Err(ValidationError::MissingField("course_subject"))
        );

        let missing_title = CourseForm {
            course_title: "  ".to_string(),
            ..form()
        };
        assert_eq!(
            missing_title.validate(),
            Err(ValidationError::MissingField("course_title"))
        );
    }

    #[test]
    fn test_validate_credits() {
        for bad in ["four", "-1", "3.5"] {
            let result = CourseForm {
                course_credits: bad.to_string(),
                ..form()
            }
            .validate();
            assert_eq!(result, Err(ValidationError::InvalidCredits(bad.to_string())));
        }
    }

    #[test]
    fn test_term_assignment_from_str() {
        assert_eq!(
            "Unassigned".parse::<TermAssignment>(),
            Ok(TermAssignment::Unassigned)
        );
        assert_eq!("".parse::<TermAssignment>(), Ok(TermAssignment::Unassigned));
        // Only the exact sentinel is treated as unassigned
        assert_eq!(
            "unassigned".parse::<TermAssignment>(),
            Ok(TermAssignment::Named("unassigned".to_string()))
        );
    }

    #[test]
    fn test_term_assignment_display() {
        assert_eq!(TermAssignment::Unassigned.to_string(), "Unassigned");
        assert_eq!(
            TermAssignment::Named("Spring 2025".to_string()).to_string(),
            "Spring 2025"
        );
        assert_eq!(TermAssignment::Unassigned.name(), None);
    }

    #[test]
    fn test_deserialize_partial_form() {
        let form: CourseForm =
            serde_json::from_str(r#"{"course_subject": "MATH", "course_code": "21-120"}"#)
                .unwrap();
        assert_eq!(form.course_subject, "MATH");
        assert_eq!(form.course_title, "");
        assert_eq!(
            form.validate(),
            Err(ValidationError::MissingField("course_title"))
        );
    }
}
