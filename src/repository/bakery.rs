//! Bakery Repository

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::Bakery;

type BakeryRow = (i64, String, DateTime<Utc>, Option<DateTime<Utc>>);

impl From<BakeryRow> for Bakery {
    fn from((id, name, created_at, updated_at): BakeryRow) -> Self {
        Bakery {
            id,
            name,
            created_at,
            updated_at,
        }
    }
}

/// Repository for the `bakeries` table
#[derive(Debug, Clone)]
pub struct BakeryRepository {
    pool: SqlitePool,
}

impl BakeryRepository {
    /// Create a new BakeryRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All bakeries, ordered by id
    pub async fn list(&self) -> Result<Vec<Bakery>, sqlx::Error> {
        let rows: Vec<BakeryRow> = sqlx::query_as(
            "SELECT id, name, created_at, updated_at FROM bakeries ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Bakery::from).collect())
    }

    /// Look up a bakery by primary key
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Bakery>, sqlx::Error> {
        let row: Option<BakeryRow> = sqlx::query_as(
            "SELECT id, name, created_at, updated_at FROM bakeries WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Bakery::from))
    }

    /// Rename a bakery. Returns false if no row matched.
    pub async fn update_name(&self, id: i64, name: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE bakeries SET name = ?, updated_at = ? WHERE id = ?")
            .bind(name)
            .bind(Utc::now())
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Insert a bakery and return the stored row
    pub async fn insert(&self, name: &str) -> Result<Bakery, sqlx::Error> {
        let created_at = Utc::now();
        let id = sqlx::query("INSERT INTO bakeries (name, created_at) VALUES (?, ?)")
            .bind(name)
            .bind(created_at)
            .execute(&self.pool)
            .await?
            .last_insert_rowid();

        tracing::debug!(bakery_id = id, "Inserted bakery");

        Ok(Bakery {
            id,
            name: name.to_string(),
            created_at,
            updated_at: None,
        })
    }

    /// Remove every bakery. Returns the number of rows deleted.
    pub async fn delete_all(&self) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM bakeries")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
