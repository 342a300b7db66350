//! Database module
//!
//! Pool construction, schema bootstrap and connectivity checks.

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::Config;

/// Tables the API reads and writes
const REQUIRED_TABLES: &[&str] = &["bakeries", "baked_goods"];

const CREATE_BAKERIES: &str = r#"
    CREATE TABLE IF NOT EXISTS bakeries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT
    )
"#;

// bakery_id is not declared as a foreign key: baked goods may point at
// bakeries that do not exist.
const CREATE_BAKED_GOODS: &str = r#"
    CREATE TABLE IF NOT EXISTS baked_goods (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT,
        price INTEGER NOT NULL,
        bakery_id INTEGER NOT NULL,
        created_at TEXT NOT NULL,
        updated_at TEXT
    )
"#;

/// Open a connection pool for the configured database
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(false);

    SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_with(options)
        .await
}

/// Verify database connectivity
pub async fn verify_connection(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;

    Ok(())
}

/// Create the bakery tables if they are missing
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query(CREATE_BAKERIES).execute(&mut *tx).await?;
    sqlx::query(CREATE_BAKED_GOODS).execute(&mut *tx).await?;

    tx.commit().await?;

    tracing::debug!("Schema initialized");
    Ok(())
}

/// Check if required tables exist
pub async fn check_schema(pool: &SqlitePool) -> Result<bool, sqlx::Error> {
    for table in REQUIRED_TABLES {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?)",
        )
        .bind(*table)
        .fetch_one(pool)
        .await?;

        if !exists {
            tracing::error!("Required table '{}' does not exist", table);
            return Ok(false);
        }
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_check_schema_before_and_after_init() {
        let pool = memory_pool().await;
        verify_connection(&pool).await.unwrap();

        assert!(!check_schema(&pool).await.unwrap());

        init_schema(&pool).await.unwrap();
        assert!(check_schema(&pool).await.unwrap());

        // Idempotent
        init_schema(&pool).await.unwrap();
        assert!(check_schema(&pool).await.unwrap());
    }
}
