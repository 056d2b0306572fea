//! Repository implementations using SeaORM

pub mod dog_repository;
pub mod owner_repository;
pub mod walker_dog_repository;
pub mod walker_repository;

pub use dog_repository::SeaOrmDogRepository;
pub use owner_repository::SeaOrmOwnerRepository;
pub use walker_dog_repository::SeaOrmWalkerDogRepository;
pub use walker_repository::SeaOrmWalkerRepository;
