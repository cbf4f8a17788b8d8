use crate::{
    entities::{courses, terms},
    error::{ServiceError, parse_id},
    services::association::AssociationService,
};
use chrono::Utc;
use log::{info, warn};
use models::{course_form::UNASSIGNED, term_form::TermFields};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait, sea_query::Expr,
};
use std::collections::HashMap;
use uuid::Uuid;

/// A term together with its ordered course list
#[derive(Debug, Clone)]
pub struct TermWithCourses {
    pub term: terms::Model,
    /// Course ids in insertion order
    pub course_ids: Vec<Uuid>,
    /// The courses behind `course_ids`, same order
    pub courses: Vec<courses::Model>,
}

pub struct TermService;

impl TermService {
    const ENTITY: &'static str = "term";

    /// All terms ordered by start date, then end date, each with its course ids
    pub async fn list_all(
        db: &DatabaseConnection,
    ) -> Result<Vec<(terms::Model, Vec<Uuid>)>, DbErr> {
        let terms = terms::Entity::find()
            .order_by_asc(terms::Column::StartDate)
            .order_by_asc(terms::Column::EndDate)
            .all(db)
            .await?;

        let term_ids = terms.iter().map(|t| t.id).collect();
        let mut course_ids = AssociationService::course_ids_by_term(db, term_ids).await?;

        Ok(terms
            .into_iter()
            .map(|term| {
                let ids = course_ids.remove(&term.id).unwrap_or_default();
                (term, ids)
            })
            .collect())
    }

    /// Term names in listing order, for course forms
    pub async fn names(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
        terms::Entity::find()
            .select_only()
            .column(terms::Column::Name)
            .order_by_asc(terms::Column::StartDate)
            .order_by_asc(terms::Column::EndDate)
            .into_tuple::<String>()
            .all(db)
            .await
    }

    /// Inserts a term with an empty course list
    pub async fn create(db: &DatabaseConnection, fields: TermFields) -> Result<Uuid, ServiceError> {
        let term_id = Uuid::new_v4();
        let now = Utc::now().naive_utc();

        terms::Entity::insert(terms::ActiveModel {
            id: Set(term_id),
            name: Set(fields.name),
            start_date: Set(fields.start_date),
            end_date: Set(fields.end_date),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(db)
        .await?;

        info!("Created term {term_id}");
        Ok(term_id)
    }

    /// Fetches a term and resolves its course list.
    ///
    /// Ids whose course no longer exists are skipped rather than failing the read.
    pub async fn get(db: &DatabaseConnection, id: &str) -> Result<TermWithCourses, ServiceError> {
        let term_id = parse_id(Self::ENTITY, id)?;

        let term = terms::Entity::find_by_id(term_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(Self::ENTITY, term_id))?;

        let course_ids = AssociationService::course_ids(db, term_id).await?;
        let mut found: HashMap<Uuid, courses::Model> = if course_ids.is_empty() {
            HashMap::new()
        } else {
            courses::Entity::find()
                .filter(courses::Column::Id.is_in(course_ids.clone()))
                .all(db)
                .await?
                .into_iter()
                .map(|course| (course.id, course))
                .collect()
        };

        let mut courses = Vec::with_capacity(course_ids.len());
        for course_id in &course_ids {
            match found.remove(course_id) {
                Some(course) => courses.push(course),
                None => warn!("Term {term_id} lists missing course {course_id}, skipping"),
            }
        }

        Ok(TermWithCourses {
            term,
            course_ids,
            courses,
        })
    }

    /// Overwrites the name and dates of a term, leaving its course list alone.
    ///
    /// A rename is carried over to the `term` field of the term's courses.
    pub async fn update(
        db: &DatabaseConnection,
        id: &str,
        fields: TermFields,
    ) -> Result<terms::Model, ServiceError> {
        let term_id = parse_id(Self::ENTITY, id)?;
        let txn = db.begin().await?;

        let existing = terms::Entity::find_by_id(term_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found(Self::ENTITY, term_id))?;
        let renamed = existing.name != fields.name;

        let mut term: terms::ActiveModel = existing.into();
        term.name = Set(fields.name.clone());
        term.start_date = Set(fields.start_date);
        term.end_date = Set(fields.end_date);
        term.updated_at = Set(Utc::now().naive_utc());
        let updated = term.update(&txn).await?;

        if renamed {
            let course_ids = AssociationService::course_ids(&txn, term_id).await?;
            let count = Self::set_course_terms(&txn, course_ids, &fields.name).await?;
            info!("Renamed term {term_id} on {count} course(s)");
        }

        txn.commit().await?;
        info!("Updated term {term_id}");
        Ok(updated)
    }

    /// Deletes a term; its courses become unassigned
    pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<(), ServiceError> {
        let term_id = parse_id(Self::ENTITY, id)?;
        let txn = db.begin().await?;

        let course_ids = AssociationService::course_ids(&txn, term_id).await?;
        let count = Self::set_course_terms(&txn, course_ids, UNASSIGNED).await?;
        AssociationService::unlink_term(&txn, term_id).await?;

        let result = terms::Entity::delete_by_id(term_id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found(Self::ENTITY, term_id));
        }

        txn.commit().await?;
        info!("Deleted term {term_id}, {count} course(s) now unassigned");
        Ok(())
    }

    /// Rewrites the `term` field of the given courses
    async fn set_course_terms<C: ConnectionTrait>(
        conn: &C,
        course_ids: Vec<Uuid>,
        term_name: &str,
    ) -> Result<u64, DbErr> {
        if course_ids.is_empty() {
            return Ok(0);
        }

        let result = courses::Entity::update_many()
            .col_expr(courses::Column::Term, Expr::value(term_name))
            .col_expr(courses::Column::UpdatedAt, Expr::value(Utc::now().naive_utc()))
            .filter(courses::Column::Id.is_in(course_ids))
            .exec(conn)
            .await?;

        Ok(result.rows_affected)
    }
}
