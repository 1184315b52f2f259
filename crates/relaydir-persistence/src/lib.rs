//! relaydir persistence - database entities and the directory repository
//!
//! This crate provides:
//! - SeaORM entity definitions for the `countries` and `vpn_servers` tables
//! - Domain value objects for the write path and joined read projections
//! - The [`DirectoryRepository`] capability trait and its two backends

pub mod embedded;
pub mod entity;
pub mod model;
pub mod sql;
pub mod traits;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export the repository trait
pub use traits::DirectoryRepository;

// Re-export the storage backends
pub use embedded::EmbeddedDirectoryRepository;
pub use sql::ExternalDbDirectoryRepository;

// Re-export model types
pub use model::{CountryInfo, JoinedServer, RepoError, ServerRecord};
