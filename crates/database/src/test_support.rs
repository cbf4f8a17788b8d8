use crate::db::create_connection;
use chrono::NaiveDate;
use migration::{Migrator, MigratorTrait};
use models::{
    course_form::{CourseFields, TermAssignment},
    term_form::{DATE_FORMAT, TermFields},
};
use sea_orm::DatabaseConnection;

/// Fresh in-memory database with all migrations applied
pub(crate) async fn setup_db() -> DatabaseConnection {
    let db = create_connection("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

pub(crate) fn course_fields(subject: &str, code: &str, term: &str) -> CourseFields {
    let Ok(term) = term.parse::<TermAssignment>();
    CourseFields {
        subject: subject.to_string(),
        code: code.to_string(),
        title: format!("{subject} {code}"),
        description: String::new(),
        credits: Some(3),
        term,
    }
}

pub(crate) fn term_fields(name: &str, start: &str, end: &str) -> TermFields {
    TermFields {
        name: name.to_string(),
        start_date: NaiveDate::parse_from_str(start, DATE_FORMAT).unwrap(),
        end_date: NaiveDate::parse_from_str(end, DATE_FORMAT).unwrap(),
    }
}
