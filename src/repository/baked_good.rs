//! Baked Good Repository

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::{Bakery, BakedGood, BakedGoodDetail, NewBakedGood};

type BakedGoodRow = (
    i64,
    Option<String>,
    i64,
    i64,
    DateTime<Utc>,
    Option<DateTime<Utc>>,
);

/// Baked good joined with its (possibly missing) bakery
type BakedGoodDetailRow = (
    i64,
    Option<String>,
    i64,
    i64,
    DateTime<Utc>,
    Option<DateTime<Utc>>,
    Option<i64>,
    Option<String>,
    Option<DateTime<Utc>>,
    Option<DateTime<Utc>>,
);

const SELECT_DETAIL: &str = r#"
    SELECT
        g.id, g.name, g.price, g.bakery_id, g.created_at, g.updated_at,
        b.id, b.name, b.created_at, b.updated_at
    FROM baked_goods g
    LEFT JOIN bakeries b ON b.id = g.bakery_id
"#;

impl From<BakedGoodRow> for BakedGood {
    fn from((id, name, price, bakery_id, created_at, updated_at): BakedGoodRow) -> Self {
        BakedGood {
            id,
            name,
            price,
            bakery_id,
            created_at,
            updated_at,
        }
    }
}

fn detail_from_row(row: BakedGoodDetailRow) -> BakedGoodDetail {
    let (id, name, price, bakery_id, created_at, updated_at, b_id, b_name, b_created_at, b_updated_at) =
        row;

    let bakery = match (b_id, b_name, b_created_at) {
        (Some(id), Some(name), Some(created_at)) => Some(Bakery {
            id,
            name,
            created_at,
            updated_at: b_updated_at,
        }),
        _ => None,
    };

    BakedGood::from((id, name, price, bakery_id, created_at, updated_at)).with_bakery(bakery)
}

/// Repository for the `baked_goods` table
#[derive(Debug, Clone)]
pub struct BakedGoodRepository {
    pool: SqlitePool,
}

impl BakedGoodRepository {
    /// Create a new BakedGoodRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All baked goods, ordered by id
    pub async fn list(&self) -> Result<Vec<BakedGood>, sqlx::Error> {
        let rows: Vec<BakedGoodRow> = sqlx::query_as(
            r#"
            SELECT id, name, price, bakery_id, created_at, updated_at
            FROM baked_goods
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BakedGood::from).collect())
    }

    /// All baked goods with their bakery, ordered by id
    pub async fn list_with_bakery(&self) -> Result<Vec<BakedGoodDetail>, sqlx::Error> {
        let rows: Vec<BakedGoodDetailRow> =
            sqlx::query_as(&format!("{SELECT_DETAIL} ORDER BY g.id"))
                .fetch_all(&self.pool)
                .await?;

        Ok(rows.into_iter().map(detail_from_row).collect())
    }

    /// Goods owned by one bakery, ordered by id
    pub async fn list_for_bakery(&self, bakery_id: i64) -> Result<Vec<BakedGood>, sqlx::Error> {
        let rows: Vec<BakedGoodRow> = sqlx::query_as(
            r#"
            SELECT id, name, price, bakery_id, created_at, updated_at
            FROM baked_goods
            WHERE bakery_id = ?
            ORDER BY id
            "#,
        )
        .bind(bakery_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(BakedGood::from).collect())
    }

    /// Look up a baked good by primary key
    pub async fn find_by_id(&self, id: i64) -> Result<Option<BakedGood>, sqlx::Error> {
        let row: Option<BakedGoodRow> = sqlx::query_as(
            r#"
            SELECT id, name, price, bakery_id, created_at, updated_at
            FROM baked_goods
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(BakedGood::from))
    }

    /// Look up a baked good with its bakery
    pub async fn find_detail_by_id(&self, id: i64) -> Result<Option<BakedGoodDetail>, sqlx::Error> {
        let row: Option<BakedGoodDetailRow> =
            sqlx::query_as(&format!("{SELECT_DETAIL} WHERE g.id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.map(detail_from_row))
    }

    /// Insert a baked good. `bakery_id` is stored as given.
    pub async fn insert(&self, new: &NewBakedGood) -> Result<BakedGood, sqlx::Error> {
        let created_at = Utc::now();
        let id = sqlx::query(
            r#"
            INSERT INTO baked_goods (name, price, bakery_id, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(new.name.as_deref())
        .bind(new.price)
        .bind(new.bakery_id)
        .bind(created_at)
        .execute(&self.pool)
        .await?
        .last_insert_rowid();

        tracing::debug!(baked_good_id = id, bakery_id = new.bakery_id, "Inserted baked good");

        Ok(BakedGood {
            id,
            name: new.name.clone(),
            price: new.price,
            bakery_id: new.bakery_id,
            created_at,
            updated_at: None,
        })
    }

    /// Delete a baked good. Returns false if no row matched.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM baked_goods WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove every baked good. Returns the number of rows deleted.
    pub async fn delete_all(&self) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM baked_goods")
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
