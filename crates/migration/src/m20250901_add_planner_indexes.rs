use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Course association looks terms up by name
        manager
            .create_index(
                Index::create()
                    .name("idx_terms_name")
                    .table(Terms::Table)
                    .col(Terms::Name)
                    .to_owned(),
            )
            .await?;

        // Listing order
        manager
            .create_index(
                Index::create()
                    .name("idx_terms_start_date_end_date")
                    .table(Terms::Table)
                    .col(Terms::StartDate)
                    .col(Terms::EndDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_courses_subject_code")
                    .table(Courses::Table)
                    .col(Courses::Subject)
                    .col(Courses::Code)
                    .to_owned(),
            )
            .await?;

        // A course appears at most once in a term's list
        manager
            .create_index(
                Index::create()
                    .name("idx_term_courses_term_id_course_id")
                    .table(TermCourses::Table)
                    .col(TermCourses::TermId)
                    .col(TermCourses::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Positions order a term's list, so no two entries share one
        manager
            .create_index(
                Index::create()
                    .name("idx_term_courses_term_id_position")
                    .table(TermCourses::Table)
                    .col(TermCourses::TermId)
                    .col(TermCourses::Position)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_term_courses_course_id")
                    .table(TermCourses::Table)
                    .col(TermCourses::CourseId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_term_courses_course_id").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_term_courses_term_id_position")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_term_courses_term_id_course_id")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("idx_courses_subject_code").to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_terms_start_date_end_date")
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(Index::drop().name("idx_terms_name").to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Terms {
    Table,
    Name,
    StartDate,
    EndDate,
}

#[derive(Iden)]
enum Courses {
    Table,
    Subject,
    Code,
}

#[derive(Iden)]
enum TermCourses {
    Table,
    TermId,
    CourseId,
    Position,
}
