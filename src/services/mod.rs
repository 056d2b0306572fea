//! Services Layer
//!
//! Lookups that span several repositories.

pub mod walk_service;

pub use walk_service::*;
