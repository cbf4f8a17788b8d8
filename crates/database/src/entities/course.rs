use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub subject: String, // e.g. "CS"
    pub code: String,    // e.g. "101"
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub credits: Option<i32>,
    pub term: String, // Term name, or "Unassigned"
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::term_course::Entity")]
    TermCourses,
}

impl Related<super::term_course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TermCourses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
