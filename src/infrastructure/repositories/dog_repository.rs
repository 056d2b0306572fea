//! SeaORM implementation of DogRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, JoinType,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

use crate::domain::{
    Dog, DogOwner, DogRepository, DomainError, NewDog, Owner, UpdateDogInput, Walker,
};
use crate::models::dog::{self, ActiveModel, Column, Entity as DogEntity, Model};
use crate::models::owner::{self, Entity as OwnerEntity};
use crate::models::walker::Entity as WalkerEntity;
use crate::models::walker_dog;

impl From<Model> for Dog {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            size: model.size,
            owner_id: model.owner_id,
        }
    }
}

/// Insert a dog on `conn`, storing a pending owner first.
///
/// Callers own the transaction; nothing is committed here.
pub(crate) async fn insert_dog<C>(conn: &C, input: NewDog) -> Result<Model, DomainError>
where
    C: ConnectionTrait,
{
    input.validate()?;

    let owner_id = match input.owner {
        Some(DogOwner::Existing(id)) => Some(id),
        Some(DogOwner::Pending(new_owner)) => {
            let stored = owner::ActiveModel {
                name: Set(new_owner.name),
                address: Set(new_owner.address),
                ..Default::default()
            }
            .insert(conn)
            .await?;
            tracing::debug!("Inserted pending owner {} ({})", stored.id, stored.name);
            Some(stored.id)
        }
        None => None,
    };

    let stored = ActiveModel {
        name: Set(input.name),
        size: Set(input.size),
        owner_id: Set(owner_id),
        ..Default::default()
    }
    .insert(conn)
    .await?;
    tracing::debug!("Inserted dog {} ({})", stored.id, stored.name);

    Ok(stored)
}

/// SeaORM-based implementation of DogRepository
pub struct SeaOrmDogRepository {
    db: DatabaseConnection,
}

impl SeaOrmDogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DogRepository for SeaOrmDogRepository {
    async fn find_all(&self) -> Result<Vec<Dog>, DomainError> {
        let dogs = DogEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(dogs.into_iter().map(Dog::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Dog>, DomainError> {
        let dog = DogEntity::find_by_id(id).one(&self.db).await?;
        Ok(dog.map(Dog::from))
    }

    async fn create(&self, input: NewDog) -> Result<Dog, DomainError> {
        input.validate()?;

        let txn = self.db.begin().await?;
        let stored = insert_dog(&txn, input).await?;
        txn.commit().await?;

        Ok(stored.into())
    }

    async fn update(&self, id: i32, input: UpdateDogInput) -> Result<Dog, DomainError> {
        input.validate()?;

        let existing = DogEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(size) = input.size {
            active.size = Set(size);
        }
        if let Some(owner_id) = input.owner_id {
            active.owner_id = Set(owner_id);
        }

        let updated = active.update(&self.db).await?;
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = DogEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(DogEntity::find().count(&self.db).await?)
    }

    async fn owner(&self, dog_id: i32) -> Result<Option<Owner>, DomainError> {
        let owner = OwnerEntity::find()
            .join(JoinType::InnerJoin, dog::Relation::Owner.def().rev())
            .filter(Column::Id.eq(dog_id))
            .one(&self.db)
            .await?;

        Ok(owner.map(Owner::from))
    }

    async fn walkers(&self, dog_id: i32) -> Result<Vec<Walker>, DomainError> {
        let walkers = WalkerEntity::find()
            .join(JoinType::InnerJoin, walker_dog::Relation::Walker.def().rev())
            .filter(walker_dog::Column::DogId.eq(dog_id))
            .order_by_asc(walker_dog::Column::Id)
            .all(&self.db)
            .await?;
        tracing::debug!("Dog {} has {} walker links", dog_id, walkers.len());

        Ok(walkers.into_iter().map(Walker::from).collect())
    }
}
