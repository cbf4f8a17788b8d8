use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "terms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String, // e.g. "Fall 2024"
    pub start_date: Date,
    pub end_date: Date,
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
