//! Persistence layer for the cinedex catalog.
//!
//! Owns the connection pool, the embedded migrations, the row models and the
//! repositories that read and write them.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Tables the catalog cannot serve without.
const CATALOG_TABLES: [&str; 2] = ["movies", "genre"];

/// `true` when every catalog table exists on the connection's search path.
///
/// A reachable database that was never migrated reports `Ok(false)`.
pub async fn catalog_ready(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let mut ready = true;
    for table in CATALOG_TABLES {
        let (present,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = current_schema() AND table_name = $1
             )",
        )
        .bind(table)
        .fetch_one(pool)
        .await?;
        ready &= present;
    }
    Ok(ready)
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await?;
    tracing::debug!("Catalog migrations up to date");
    Ok(())
}
