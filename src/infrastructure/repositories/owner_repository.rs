//! SeaORM implementation of OwnerRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::domain::{Dog, DomainError, NewOwner, Owner, OwnerRepository, UpdateOwnerInput};
use crate::models::dog::{self, Entity as DogEntity};
use crate::models::owner::{ActiveModel, Column, Entity as OwnerEntity, Model};

impl From<Model> for Owner {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            address: model.address,
        }
    }
}

/// SeaORM-based implementation of OwnerRepository
pub struct SeaOrmOwnerRepository {
    db: DatabaseConnection,
}

impl SeaOrmOwnerRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OwnerRepository for SeaOrmOwnerRepository {
    async fn find_all(&self) -> Result<Vec<Owner>, DomainError> {
        let owners = OwnerEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(owners.into_iter().map(Owner::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, DomainError> {
        let owner = OwnerEntity::find_by_id(id).one(&self.db).await?;
        Ok(owner.map(Owner::from))
    }

    async fn create(&self, input: NewOwner) -> Result<Owner, DomainError> {
        input.validate()?;

        let owner = ActiveModel {
            name: Set(input.name),
            address: Set(input.address),
            ..Default::default()
        };

        let result = owner.insert(&self.db).await?;
        tracing::debug!("Inserted owner {} ({})", result.id, result.name);

        Ok(result.into())
    }

    async fn update(&self, id: i32, input: UpdateOwnerInput) -> Result<Owner, DomainError> {
        input.validate()?;

        let existing = OwnerEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(DomainError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(address) = input.address {
            active.address = Set(address);
        }

        let updated = active.update(&self.db).await?;
        Ok(updated.into())
    }

    async fn delete(&self, id: i32) -> Result<(), DomainError> {
        let result = OwnerEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(OwnerEntity::find().count(&self.db).await?)
    }

    async fn dogs(&self, owner_id: i32) -> Result<Vec<Dog>, DomainError> {
        let dogs = DogEntity::find()
            .filter(dog::Column::OwnerId.eq(owner_id))
            .order_by_asc(dog::Column::Id)
            .all(&self.db)
            .await?;

        Ok(dogs.into_iter().map(Dog::from).collect())
    }
}
