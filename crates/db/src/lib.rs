//! Persistence layer for to-do items.
//!
//! - [`models`]: row structs and DTOs
//! - [`repositories`]: sqlx queries against PostgreSQL
//! - [`store`]: the [`ToDoStore`] contract the service layer depends on,
//!   plus its PostgreSQL implementation
//! - [`memory`]: an in-process [`ToDoStore`] for tests and local runs

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;

pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub use memory::InMemoryToDoStore;
pub use store::{PgToDoStore, StoreError, ToDoStore};

pub type DbPool = sqlx::PgPool;

/// Upper bound on waiting for a pooled connection. Also bounds how long a
/// sweep can sit on an exhausted pool.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations in `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
