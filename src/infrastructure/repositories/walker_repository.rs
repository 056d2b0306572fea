//! SeaORM implementation of WalkerRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

use crate::domain::{Dog, DomainError, NewWalker, UpdateWalkerInput, Walker, WalkerRepository};
use crate::models::dog::Entity as DogEntity;
use crate::models::walker::{ActiveModel, Column, Entity as WalkerEntity, Model};
use crate::models::walker_dog;

impl From<Model> for Walker {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            day: model.day,
            car: model.car,
        }
    }
}

/// Insert a walker on `conn` without committing.
pub(crate) async fn insert_walker<C>(conn: &C, input: NewWalker) -> Result<Model, DomainError>
where
    C: ConnectionTrait,
{
    input.validate()?;

    let stored = ActiveModel {
        name: Set(input.name),
        day: Set(input.day),
        car: Set(input.car),
        ..Default::default()
    }
    .insert(conn)
    .await?;
    tracing::debug!("Inserted walker {} ({})", stored.id, stored.name);

    Ok(stored)
}

/// SeaORM-based implementation of WalkerRepository
pub struct SeaOrmWalkerRepository {
    db: DatabaseConnection,
}

impl SeaOrmWalkerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WalkerRepository for SeaOrmWalkerRepository {
    async fn find_all(&self) -> Result<Vec<Walker>, DomainError> {
        let walkers = WalkerEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(walkers.into_iter().map(Walker::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Walker>, DomainError> {
        let walker = WalkerEntity::find_by_id(id).one(&self.db).await?;
        Ok(walker.map(Walker::from))
    }

    async fn find_by_day(&self, day: &str) -> Result<Vec<Walker>, DomainError> {
        let walkers = WalkerEntity::find()
            .filter(Column::Day.eq(day))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(walkers.into_iter().map(Walker::from).collect())
    }

    async fn create(&self, input: NewWalker) -> Result<Walker, DomainError> {
        Ok(insert_walker(&self.db, input).await?.into())
    }

    async fn update(&self, id: i32, input: UpdateWalkerInput) -> Result<Walker, DomainError> {
        input.validate()?;

        let existing = WalkerEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(day) = input.day {
            active.day = Set(day);
        }
        if let Some(car) = input.car {
            active.car = Set(car);
        }

        let updated = active.update(&self.db).await?;
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = WalkerEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(WalkerEntity::find().count(&self.db).await?)
    }

    async fn dogs(&self, walker_id: i32) -> Result<Vec<Dog>, DomainError> {
        let dogs = DogEntity::find()
            .join(JoinType::InnerJoin, walker_dog::Relation::Dog.def().rev())
            .filter(walker_dog::Column::WalkerId.eq(walker_id))
            .order_by_asc(walker_dog::Column::Id)
            .all(&self.db)
            .await?;

        Ok(dogs.into_iter().map(Dog::from).collect())
    }
}
