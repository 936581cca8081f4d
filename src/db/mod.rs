//! Database layer
//!
//! Storage for recorded sessions. Two backends are supported behind the
//! `DatabasePool` trait:
//! - SQLite (default, single-file local store, used by the tests)
//! - PostgreSQL (the production store pointed to by `DB_URL`)
//!
//! ```ignore
//! use pomo::config::DatabaseConfig;
//! use pomo::db::{create_pool, migrations};
//!
//! let pool = create_pool(&DatabaseConfig::default()).await?;
//! migrations::run_migrations(&pool).await?;
//! pool.ping().await?;
//! ```

pub mod migrations;
pub mod pool;
pub mod repositories;

pub use pool::{
    create_pool, create_test_pool, DatabasePool, DynDatabasePool, PostgresDatabase,
    SqliteDatabase,
};
