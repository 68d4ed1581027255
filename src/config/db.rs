// src/config/db.rs
// DOCUMENTATION: Database connection pool initialization
// PURPOSE: Setup the SQLite connection pool and the cafe table

use crate::config::Config;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// DDL for the single table. Created if absent, never migrated.
const CREATE_CAFE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS cafe (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name VARCHAR(250) NOT NULL UNIQUE,
        map_url VARCHAR(500) NOT NULL,
        img_url VARCHAR(500) NOT NULL,
        location VARCHAR(250) NOT NULL,
        seats VARCHAR(250) NOT NULL,
        has_toilet BOOLEAN NOT NULL,
        has_wifi BOOLEAN NOT NULL,
        has_sockets BOOLEAN NOT NULL,
        can_take_calls BOOLEAN NOT NULL,
        coffee_price VARCHAR(250)
    )
"#;

/// Initialize SQLite connection pool
/// DOCUMENTATION: Opens (or creates) the database file and ensures the schema
/// Called once during application startup in main.rs
pub async fn init_db_pool(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    log::info!("Initializing database pool: {}", config.database_url);

    let options = SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        .connect_with(options)
        .await?;

    ensure_schema(&pool).await?;

    log::info!("Database pool initialized successfully");
    Ok(pool)
}

/// Create the cafe table when it does not exist yet
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_CAFE_TABLE).execute(pool).await?;
    Ok(())
}

/// Single-connection in-memory pool shared by the test modules.
/// Every SQLite memory connection is its own database, so the pool is pinned
/// to one connection that never expires.
#[cfg(test)]
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(Option::<Duration>::None)
        .max_lifetime(Option::<Duration>::None)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    ensure_schema(&pool).await.expect("schema");
    pool
}
