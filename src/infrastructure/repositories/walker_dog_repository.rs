//! SeaORM implementation of WalkerDogRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use crate::domain::{DomainError, WalkerDog, WalkerDogRepository};
use crate::models::walker_dog::{ActiveModel, Column, Entity as WalkerDogEntity, Model};

impl From<Model> for WalkerDog {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            dog_id: model.dog_id,
            walker_id: model.walker_id,
        }
    }
}

/// SeaORM-based implementation of WalkerDogRepository
pub struct SeaOrmWalkerDogRepository {
    db: DatabaseConnection,
}

impl SeaOrmWalkerDogRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WalkerDogRepository for SeaOrmWalkerDogRepository {
    async fn find_all(&self) -> Result<Vec<WalkerDog>, DomainError> {
        let links = WalkerDogEntity::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(links.into_iter().map(WalkerDog::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<WalkerDog>, DomainError> {
        let link = WalkerDogEntity::find_by_id(id).one(&self.db).await?;
        Ok(link.map(WalkerDog::from))
    }

    async fn link(&self, dog_id: i32, walker_id: i32) -> Result<WalkerDog, DomainError> {
        // Foreign keys reject unknown dogs or walkers; repeated pairs are allowed.
        let new_link = ActiveModel {
            dog_id: Set(dog_id),
            walker_id: Set(walker_id),
            ..Default::default()
        };

        let stored = new_link.insert(&self.db).await?;
        tracing::debug!("Linked dog {} to walker {} as {}", dog_id, walker_id, stored.id);

        Ok(stored.into())
    }

    async fn unlink(&self, id: i32) -> Result<(), DomainError> {
        let result = WalkerDogEntity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected == 0 {
            return Err(DomainError::NotFound);
        }

        Ok(())
    }

    async fn count(&self) -> Result<u64, DomainError> {
        Ok(WalkerDogEntity::find().count(&self.db).await?)
    }
}
