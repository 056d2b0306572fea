//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use std::fmt;

use async_trait::async_trait;

use super::DomainError;
use super::validation::*;

/// Owner data returned by repositories
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Owner {
    pub id: i32,
    pub name: String,
    pub address: String,
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Owner {}>", self.name)
    }
}

/// Dog data returned by repositories
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Dog {
    pub id: i32,
    pub name: String,
    pub size: Option<String>,
    pub owner_id: Option<i32>,
}

impl fmt::Display for Dog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Dog: {}>", self.name)
    }
}

/// Walker data returned by repositories
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Walker {
    pub id: i32,
    pub name: String,
    pub day: String,
    pub car: Option<String>,
}

impl fmt::Display for Walker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Walker: {} walks on {}>", self.name, self.day)
    }
}

/// One dog/walker pairing
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct WalkerDog {
    pub id: i32,
    pub dog_id: i32,
    pub walker_id: i32,
}

impl fmt::Display for WalkerDog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Dog Walker {}>", self.id)
    }
}

/// Input for creating an owner
#[derive(Debug, Clone, serde::Deserialize)]
pub struct NewOwner {
    pub name: String,
    pub address: String,
}

impl NewOwner {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        check_len("owner.name", &self.name, OWNER_NAME_MAX)?;
        check_len("owner.address", &self.address, OWNER_ADDRESS_MAX)
    }
}

/// Owner reference carried by a new dog.
///
/// `Pending` holds an owner that has not been stored yet; it is inserted in the
/// same transaction as the dog so the dog's `owner_id` resolves on commit.
#[derive(Debug, Clone)]
pub enum DogOwner {
    Existing(i32),
    Pending(NewOwner),
}

/// Input for creating a dog
#[derive(Debug, Clone)]
pub struct NewDog {
    pub name: String,
    pub size: Option<String>,
    pub owner: Option<DogOwner>,
}

impl NewDog {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: None,
            owner: None,
        }
    }

    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn owned_by(mut self, owner_id: i32) -> Self {
        self.owner = Some(DogOwner::Existing(owner_id));
        self
    }

    pub fn owned_by_new(mut self, owner: NewOwner) -> Self {
        self.owner = Some(DogOwner::Pending(owner));
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        check_len("dog.name", &self.name, DOG_NAME_MAX)?;
        check_opt_len("dog.size", self.size.as_deref(), DOG_SIZE_MAX)?;
        if let Some(DogOwner::Pending(owner)) = &self.owner {
            owner.validate()?;
        }
        Ok(())
    }
}

/// Input for creating a walker
#[derive(Debug, Clone, serde::Deserialize)]
pub struct NewWalker {
    pub name: String,
    pub day: String,
    pub car: Option<String>,
}

impl NewWalker {
    pub fn new(name: impl Into<String>, day: impl Into<String>, car: Option<&str>) -> Self {
        Self {
            name: name.into(),
            day: day.into(),
            car: car.map(str::to_owned),
        }
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        check_len("walker.name", &self.name, WALKER_NAME_MAX)?;
        check_len("walker.day", &self.day, WALKER_DAY_MAX)?;
        check_opt_len("walker.car", self.car.as_deref(), WALKER_CAR_MAX)
    }
}

/// Input for updating an owner
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdateOwnerInput {
    pub name: Option<String>,
    pub address: Option<String>,
}

impl UpdateOwnerInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        check_opt_len("owner.name", self.name.as_deref(), OWNER_NAME_MAX)?;
        check_opt_len("owner.address", self.address.as_deref(), OWNER_ADDRESS_MAX)
    }
}

/// Input for updating a dog
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdateDogInput {
    pub name: Option<String>,
    pub size: Option<Option<String>>,
    pub owner_id: Option<Option<i32>>,
}

impl UpdateDogInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        check_opt_len("dog.name", self.name.as_deref(), DOG_NAME_MAX)?;
        check_opt_len("dog.size", self.size.as_ref().and_then(|s| s.as_deref()), DOG_SIZE_MAX)
    }
}

/// Input for updating a walker
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct UpdateWalkerInput {
    pub name: Option<String>,
    pub day: Option<String>,
    pub car: Option<Option<String>>,
}

impl UpdateWalkerInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        check_opt_len("walker.name", self.name.as_deref(), WALKER_NAME_MAX)?;
        check_opt_len("walker.day", self.day.as_deref(), WALKER_DAY_MAX)?;
        check_opt_len("walker.car", self.car.as_ref().and_then(|c| c.as_deref()), WALKER_CAR_MAX)
    }
}

/// Repository trait for Owner entity
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Find all owners
    async fn find_all(&self) -> Result<Vec<Owner>, DomainError>;

    /// Find an owner by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Owner>, DomainError>;

    /// Create a new owner
    async fn create(&self, input: NewOwner) -> Result<Owner, DomainError>;

    /// Update an owner
    async fn update(&self, id: i32, input: UpdateOwnerInput) -> Result<Owner, DomainError>;

    /// Delete an owner by ID
    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// Dogs owned by this owner, by dog id
    async fn dogs(&self, owner_id: i32) -> Result<Vec<Dog>, DomainError>;
}

/// Repository trait for Dog entity
#[async_trait]
pub trait DogRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Dog>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Dog>, DomainError>;

    /// Create a new dog, inserting a pending owner first if one is attached
    async fn create(&self, input: NewDog) -> Result<Dog, DomainError>;

    async fn update(&self, id: i32, input: UpdateDogInput) -> Result<Dog, DomainError>;

    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// The dog's owner, if it has one
    async fn owner(&self, dog_id: i32) -> Result<Option<Owner>, DomainError>;

    /// Walkers of this dog, one entry per association row in link order
    async fn walkers(&self, dog_id: i32) -> Result<Vec<Walker>, DomainError>;
}

/// Repository trait for Walker entity
#[async_trait]
pub trait WalkerRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Walker>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Walker>, DomainError>;

    /// Walkers working on `day` (exact match)
    async fn find_by_day(&self, day: &str) -> Result<Vec<Walker>, DomainError>;

    async fn create(&self, input: NewWalker) -> Result<Walker, DomainError>;

    async fn update(&self, id: i32, input: UpdateWalkerInput) -> Result<Walker, DomainError>;

    async fn delete(&self, id: i32) -> Result<(), DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;

    /// Dogs walked by this walker, one entry per association row in link order
    async fn dogs(&self, walker_id: i32) -> Result<Vec<Dog>, DomainError>;
}

/// Repository trait for the dog/walker association
#[async_trait]
pub trait WalkerDogRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<WalkerDog>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<WalkerDog>, DomainError>;

    /// Store a new association row. Linking an already linked pair adds a
    /// second row.
    async fn link(&self, dog_id: i32, walker_id: i32) -> Result<WalkerDog, DomainError>;

    /// Delete a single association row by ID
    async fn unlink(&self, id: i32) -> Result<(), DomainError>;

    async fn count(&self) -> Result<u64, DomainError>;
}
