use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "walkers")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "w_id")]
    pub id: i32,
    pub name: String,
    /// Day of the week the walker works, e.g. `Wednesday`.
    pub day: String,
    pub car: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::walker_dog::Entity")]
    WalkerDog,
}

impl Related<super::walker_dog::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WalkerDog.def()
    }
}

impl Related<super::dog::Entity> for Entity {
    fn to() -> RelationDef {
        super::walker_dog::Relation::Dog.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::walker_dog::Relation::Walker.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
