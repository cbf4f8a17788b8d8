use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create terms table
        manager
            .create_table(
                Table::create()
                    .table(Terms::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Terms::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Terms::Name).string().not_null())
                    .col(ColumnDef::new(Terms::StartDate).date().not_null())
                    .col(ColumnDef::new(Terms::EndDate).date().not_null())
                    .col(ColumnDef::new(Terms::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Terms::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create courses table. `term` holds a term name or "Unassigned"
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Courses::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Courses::Subject).string().not_null())
                    .col(ColumnDef::new(Courses::Code).string().not_null())
                    .col(ColumnDef::new(Courses::Title).string().not_null())
                    .col(ColumnDef::new(Courses::Description).text().not_null())
                    .col(ColumnDef::new(Courses::Credits).integer())
                    .col(
                        ColumnDef::new(Courses::Term)
                            .string()
                            .not_null()
                            .default("Unassigned"),
                    )
                    .col(ColumnDef::new(Courses::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(Courses::UpdatedAt).date_time().not_null())
                    .to_owned(),
            )
            .await?;

        // Create term_courses junction table, the ordered course list of a term
        manager
            .create_table(
                Table::create()
                    .table(TermCourses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TermCourses::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TermCourses::TermId).uuid().not_null())
                    .col(ColumnDef::new(TermCourses::CourseId).uuid().not_null())
                    .col(ColumnDef::new(TermCourses::Position).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-term_courses-term_id")
                            .from(TermCourses::Table, TermCourses::TermId)
                            .to(Terms::Table, Terms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-term_courses-course_id")
                            .from(TermCourses::Table, TermCourses::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TermCourses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Terms::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Terms {
    Table,
    Id,
    Name,
    StartDate,
    EndDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Courses {
    Table,
    Id,
    Subject,
    Code,
    Title,
    Description,
    Credits,
    Term,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum TermCourses {
    Table,
    Id,
    TermId,
    CourseId,
    Position,
}
