//! SQLite persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the domain repository ports backed by the
//! SQLite library database via Diesel with r2d2 connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repository implementations only translate between
//!   Diesel models and domain types. No business logic resides here.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are implementation details, never exposed to
//!   the domain layer.
//! - **Executor hygiene**: SQLite connections are synchronous, so every
//!   query runs on a blocking thread via `tokio::task::spawn_blocking`.
//! - **Strongly typed errors**: database failures are mapped to the domain
//!   persistence error types, separating connection from query failures.

mod diesel_artist_catalogue;
mod diesel_catalogue_ingestion;
pub(crate) mod diesel_helpers;
mod diesel_login_service;
mod diesel_user_repository;
pub mod migrate;
mod models;
mod pool;
mod schema;

pub use diesel_artist_catalogue::DieselArtistCatalogue;
pub use diesel_catalogue_ingestion::DieselCatalogueIngestion;
pub use diesel_login_service::DieselLoginService;
pub use diesel_user_repository::DieselUserRepository;
pub use migrate::{BootstrapOutcome, MigrationError, apply_migrations, bootstrap_database};
pub use pool::{DbPool, PoolConfig, PoolError};
