use crate::{
    entities::courses,
    error::{ServiceError, parse_id},
    services::association::AssociationService,
};
use chrono::Utc;
use log::info;
use models::course_form::CourseFields;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    TransactionTrait,
};
use uuid::Uuid;

pub struct CourseService;

impl CourseService {
    const ENTITY: &'static str = "course";

    /// All courses ordered by subject, then code
    pub async fn list_all(db: &DatabaseConnection) -> Result<Vec<courses::Model>, DbErr> {
        courses::Entity::find()
            .order_by_asc(courses::Column::Subject)
            .order_by_asc(courses::Column::Code)
            .all(db)
            .await
    }

    /// Inserts a course and adds it to the term it names.
    ///
    /// Fails with [`ServiceError::UnknownTerm`] without creating the course when
    /// no term has that name.
    pub async fn create(
        db: &DatabaseConnection,
        fields: CourseFields,
    ) -> Result<Uuid, ServiceError> {
        let txn = db.begin().await?;

        let course_id = Uuid::new_v4();
        let now = Utc::now().naive_utc();
        courses::Entity::insert(courses::ActiveModel {
            id: Set(course_id),
            subject: Set(fields.subject),
            code: Set(fields.code),
            title: Set(fields.title),
            description: Set(fields.description),
            credits: Set(fields.credits),
            term: Set(fields.term.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        })
        .exec(&txn)
        .await?;

        AssociationService::assign(&txn, course_id, &fields.term).await?;

        txn.commit().await?;
        info!("Created course {course_id} in term {}", fields.term);
        Ok(course_id)
    }

    pub async fn get(db: &DatabaseConnection, id: &str) -> Result<courses::Model, ServiceError> {
        let course_id = parse_id(Self::ENTITY, id)?;

        courses::Entity::find_by_id(course_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found(Self::ENTITY, course_id))
    }

    /// Replaces every field of the course and moves it to the term it now names
    pub async fn update(
        db: &DatabaseConnection,
        id: &str,
        fields: CourseFields,
    ) -> Result<courses::Model, ServiceError> {
        let course_id = parse_id(Self::ENTITY, id)?;
        let txn = db.begin().await?;

        let existing = courses::Entity::find_by_id(course_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found(Self::ENTITY, course_id))?;

        let mut course: courses::ActiveModel = existing.into();
        course.subject = Set(fields.subject);
        course.code = Set(fields.code);
        course.title = Set(fields.title);
        course.description = Set(fields.description);
        course.credits = Set(fields.credits);
        course.term = Set(fields.term.to_string());
        course.updated_at = Set(Utc::now().naive_utc());
        let updated = course.update(&txn).await?;

        AssociationService::assign(&txn, course_id, &fields.term).await?;

        txn.commit().await?;
        info!("Updated course {course_id}");
        Ok(updated)
    }

    /// Deletes the course and removes it from its term's list
    pub async fn delete(db: &DatabaseConnection, id: &str) -> Result<(), ServiceError> {
        let course_id = parse_id(Self::ENTITY, id)?;
        let txn = db.begin().await?;

        AssociationService::unlink_course(&txn, course_id).await?;
        let result = courses::Entity::delete_by_id(course_id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found(Self::ENTITY, course_id));
        }

        txn.commit().await?;
        info!("Deleted course {course_id}");
        Ok(())
    }
}
