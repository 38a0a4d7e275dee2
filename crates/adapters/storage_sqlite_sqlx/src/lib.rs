//! # flatshop-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `flatshop-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle and verify it is live at startup
//! - Bootstrap the `apartments` and `cart` tables
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `flatshop-app` (for port traits) and `flatshop-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod apartment_repo;
mod cart_repo;
pub mod error;
pub mod pool;

pub use apartment_repo::SqliteApartmentRepository;
pub use cart_repo::SqliteCartRepository;
pub use error::StorageError;
pub use pool::{Config, Database};
