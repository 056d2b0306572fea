use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Association row between a dog and the walker who walks it.
///
/// There is no uniqueness constraint on `(dog_id, walker_id)`; linking the
/// same pair twice stores two rows.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "walkerdogs")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "wd_id")]
    pub id: i32,
    pub dog_id: i32,
    pub walker_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dog::Entity",
        from = "Column::DogId",
        to = "super::dog::Column::Id"
    )]
    Dog,
    #[sea_orm(
        belongs_to = "super::walker::Entity",
        from = "Column::WalkerId",
        to = "super::walker::Column::Id"
    )]
    Walker,
}

impl Related<super::dog::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Dog.def()
    }
}

impl Related<super::walker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Walker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
