use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Owned by exactly one instructor; `instructor_id` is unique
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "instructor_detail")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub youtube_channel: String,
    pub hobby: String,
    #[sea_orm(unique)]
    pub instructor_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::instructor::Entity",
        from = "Column::InstructorId",
        to = "super::instructor::Column::Id",
        on_delete = "Cascade"
    )]
    Instructor,
}

impl Related<super::instructor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
