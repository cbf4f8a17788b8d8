use crate::{
    entities::{term_courses, terms},
    error::ServiceError,
};
use log::debug;
use models::course_form::TermAssignment;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::HashMap;
use uuid::Uuid;

/// Maintains the ordered course list of each term.
///
/// Callers run these inside the transaction that writes the course or term, so
/// a failed lookup leaves no partial writes behind.
pub struct AssociationService;

impl AssociationService {
    /// Finds the term with the given name, taking the oldest one if names repeat
    pub async fn find_term_by_name<C: ConnectionTrait>(
        conn: &C,
        name: &str,
    ) -> Result<terms::Model, ServiceError> {
        terms::Entity::find()
            .filter(terms::Column::Name.eq(name))
            .order_by_asc(terms::Column::CreatedAt)
            .order_by_asc(terms::Column::Id)
            .one(conn)
            .await?
            .ok_or_else(|| ServiceError::UnknownTerm(name.to_string()))
    }

    /// Puts the course in the list of the term it names and removes it from every
    /// other term. Returns the id of the term the course now belongs to.
    pub async fn assign<C: ConnectionTrait>(
        conn: &C,
        course_id: Uuid,
        assignment: &TermAssignment,
    ) -> Result<Option<Uuid>, ServiceError> {
        let term_id = match assignment.name() {
            Some(name) => Some(Self::resolve_term(conn, course_id, name).await?),
            None => None,
        };

        let mut stale = term_courses::Entity::delete_many()
            .filter(term_courses::Column::CourseId.eq(course_id));
        if let Some(term_id) = term_id {
            stale = stale.filter(term_courses::Column::TermId.ne(term_id));
        }
        let removed = stale.exec(conn).await?.rows_affected;
        if removed > 0 {
            debug!("Removed course {course_id} from {removed} other term(s)");
        }

        if let Some(term_id) = term_id {
            Self::link(conn, term_id, course_id).await?;
        }

        Ok(term_id)
    }

    /// Picks the term a course named `name` belongs in. A term the course is
    /// already listed in wins over an older term that shares its name.
    async fn resolve_term<C: ConnectionTrait>(
        conn: &C,
        course_id: Uuid,
        name: &str,
    ) -> Result<Uuid, ServiceError> {
        let current = terms::Entity::find()
            .inner_join(term_courses::Entity)
            .filter(term_courses::Column::CourseId.eq(course_id))
            .filter(terms::Column::Name.eq(name))
            .order_by_asc(terms::Column::CreatedAt)
            .order_by_asc(terms::Column::Id)
            .one(conn)
            .await?;

        match current {
            Some(term) => Ok(term.id),
            None => Ok(Self::find_term_by_name(conn, name).await?.id),
        }
    }

    /// Appends the course to the end of the term's list unless it is already there
    async fn link<C: ConnectionTrait>(
        conn: &C,
        term_id: Uuid,
        course_id: Uuid,
    ) -> Result<(), DbErr> {
        let existing = term_courses::Entity::find()
            .filter(term_courses::Column::TermId.eq(term_id))
            .filter(term_courses::Column::CourseId.eq(course_id))
            .one(conn)
            .await?;
        if existing.is_some() {
            return Ok(());
        }

        // Serializes appends to the same term so positions stay distinct
        terms::Entity::find_by_id(term_id)
            .lock_exclusive()
            .one(conn)
            .await?;

        let last = term_courses::Entity::find()
            .filter(term_courses::Column::TermId.eq(term_id))
            .order_by_desc(term_courses::Column::Position)
            .one(conn)
            .await?;
        let position = last.map_or(0, |row| row.position + 1);

        term_courses::Entity::insert(term_courses::ActiveModel {
            id: Set(Uuid::new_v4()),
            term_id: Set(term_id),
            course_id: Set(course_id),
            position: Set(position),
        })
        .exec(conn)
        .await?;

        debug!("Linked course {course_id} to term {term_id} at position {position}");
        Ok(())
    }

    /// Removes the course from every term's list
    pub async fn unlink_course<C: ConnectionTrait>(
        conn: &C,
        course_id: Uuid,
    ) -> Result<u64, DbErr> {
        let result = term_courses::Entity::delete_many()
            .filter(term_courses::Column::CourseId.eq(course_id))
            .exec(conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Empties the term's list
    pub async fn unlink_term<C: ConnectionTrait>(conn: &C, term_id: Uuid) -> Result<u64, DbErr> {
        let result = term_courses::Entity::delete_many()
            .filter(term_courses::Column::TermId.eq(term_id))
            .exec(conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Course ids of a term, in insertion order
    pub async fn course_ids<C: ConnectionTrait>(
        conn: &C,
        term_id: Uuid,
    ) -> Result<Vec<Uuid>, DbErr> {
        let rows = term_courses::Entity::find()
            .filter(term_courses::Column::TermId.eq(term_id))
            .order_by_asc(term_courses::Column::Position)
            .all(conn)
            .await?;

        Ok(rows.into_iter().map(|row| row.course_id).collect())
    }

    /// Course ids of several terms at once, each list in insertion order
    pub async fn course_ids_by_term<C: ConnectionTrait>(
        conn: &C,
        term_ids: Vec<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<Uuid>>, DbErr> {
        let mut by_term: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        if term_ids.is_empty() {
            return Ok(by_term);
        }

        let rows = term_courses::Entity::find()
            .filter(term_courses::Column::TermId.is_in(term_ids))
            .order_by_asc(term_courses::Column::Position)
            .all(conn)
            .await?;

        for row in rows {
            by_term.entry(row.term_id).or_default().push(row.course_id);
        }

        Ok(by_term)
    }
}
