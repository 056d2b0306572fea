//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies beyond the error conversion
//! from SeaORM. Only record types, input validation, repository traits and
//! domain error types.

pub mod errors;
pub mod repositories;
pub mod validation;

pub use errors::DomainError;
pub use repositories::*;
