use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dogs")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "d_id")]
    pub id: i32,
    pub name: String,
    /// Free-form size label such as `small`, `med` or `large`.
    pub size: Option<String>,
    pub owner_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::OwnerId",
        to = "super::owner::Column::Id"
    )]
    Owner,
    #[sea_orm(has_many = "super::walker_dog::Entity")]
    WalkerDog,
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::walker_dog::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WalkerDog.def()
    }
}

impl Related<super::walker::Entity> for Entity {
    fn to() -> RelationDef {
        super::walker_dog::Relation::Walker.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::walker_dog::Relation::Dog.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
