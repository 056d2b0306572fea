//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Table definitions (schema)
//! - Database connection (db)
//! - Configuration loading (config)
//! - Repository implementations (repositories)
//! - Application state (state)
//! - Demo data (seed)

pub mod config;
pub mod db;
pub mod repositories;
pub mod schema;
pub mod seed;
pub mod state;

pub use repositories::*;
pub use schema::Schema;
pub use state::AppState;
