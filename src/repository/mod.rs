//! Repository module
//!
//! Typed query functions over the bakery tables.

mod baked_good;
mod bakery;

pub use baked_good::BakedGoodRepository;
pub use bakery::BakeryRepository;

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;

    /// Single-connection in-memory pool with the schema applied
    pub async fn memory_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::init_schema(&pool).await.unwrap();
        pool
    }
}
