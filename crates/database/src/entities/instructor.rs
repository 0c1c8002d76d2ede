use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "instructor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::instructor_detail::Entity")]
    InstructorDetail,
}

impl Related<super::instructor_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InstructorDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
