//! Application handle owning the connection, the schema and the repositories

use sea_orm::{DatabaseConnection, DbErr};
use std::sync::Arc;

use crate::domain::{DogRepository, OwnerRepository, WalkerDogRepository, WalkerRepository};
use crate::infrastructure::config::Config;
use crate::infrastructure::db;
use crate::infrastructure::schema::Schema;
use crate::infrastructure::{
    SeaOrmDogRepository, SeaOrmOwnerRepository, SeaOrmWalkerDogRepository, SeaOrmWalkerRepository,
};

#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    schema: Arc<Schema>,
    pub owner_repo: Arc<dyn OwnerRepository>,
    pub dog_repo: Arc<dyn DogRepository>,
    pub walker_repo: Arc<dyn WalkerRepository>,
    pub walker_dog_repo: Arc<dyn WalkerDogRepository>,
}

impl AppState {
    /// Open the configured database with the default schema
    pub async fn connect(config: &Config) -> Result<Self, DbErr> {
        let schema = Schema::default();
        let db = db::init_db(&config.database_url, &schema).await?;
        Ok(Self::new(db, schema))
    }

    /// Wrap an already initialised connection
    pub fn new(db: DatabaseConnection, schema: Schema) -> Self {
        let owner_repo = Arc::new(SeaOrmOwnerRepository::new(db.clone()));
        let dog_repo = Arc::new(SeaOrmDogRepository::new(db.clone()));
        let walker_repo = Arc::new(SeaOrmWalkerRepository::new(db.clone()));
        let walker_dog_repo = Arc::new(SeaOrmWalkerDogRepository::new(db.clone()));

        Self {
            db,
            schema: Arc::new(schema),
            owner_repo,
            dog_repo,
            walker_repo,
            walker_dog_repo,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Close the underlying pool. Repositories cloned from this state stop
    /// working afterwards.
    pub async fn close(self) -> Result<(), DbErr> {
        db::close_db(self.db).await
    }
}

impl AsRef<DatabaseConnection> for AppState {
    fn as_ref(&self) -> &DatabaseConnection {
        &self.db
    }
}
