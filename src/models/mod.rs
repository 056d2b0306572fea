pub mod dog;
pub mod owner;
pub mod walker;
pub mod walker_dog;

pub use dog::Entity as DogEntity;
pub use owner::Entity as OwnerEntity;
pub use walker::Entity as WalkerEntity;
pub use walker_dog::Entity as WalkerDogEntity;
