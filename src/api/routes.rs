//! API Routes
//!
//! HTTP endpoint definitions.

use std::collections::HashMap;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::domain::{BakedGood, BakedGoodDetail, BakeryDetail, NewBakedGood};
use crate::error::{AppError, AppResult};
use crate::repository::{BakedGoodRepository, BakeryRepository};

use super::form::FormFields;

// =========================================================================
// Response types
// =========================================================================

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub delete_successful: bool,
    pub message: &'static str,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<SqlitePool> {
    Router::new()
        .route("/", get(index))
        .route("/bakeries", get(list_bakeries))
        .route("/bakeries/:id", get(get_bakery).patch(update_bakery))
        .route("/baked_goods", get(list_baked_goods).post(create_baked_good))
        .route("/baked_goods/:id", delete(delete_baked_good))
}

/// A path id that is not an integer can never match a row.
fn record_id(path: Result<Path<i64>, PathRejection>) -> AppResult<i64> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unparseable record id");
        AppError::NotFound
    })
}

/// Load a bakery together with its goods
async fn bakery_detail(pool: &SqlitePool, id: i64) -> AppResult<BakeryDetail> {
    let bakery = BakeryRepository::new(pool.clone())
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound)?;

    let baked_goods = BakedGoodRepository::new(pool.clone())
        .list_for_bakery(id)
        .await?;

    Ok(bakery.with_baked_goods(baked_goods))
}

// =========================================================================
// GET /
// =========================================================================

async fn index() -> &'static str {
    "Index for Bakery API"
}

// =========================================================================
// GET /bakeries
// =========================================================================

/// List all bakeries with their goods
async fn list_bakeries(State(pool): State<SqlitePool>) -> AppResult<Json<Vec<BakeryDetail>>> {
    let bakeries = BakeryRepository::new(pool.clone()).list().await?;

    let mut goods_by_bakery: HashMap<i64, Vec<BakedGood>> = HashMap::new();
    for good in BakedGoodRepository::new(pool).list().await? {
        goods_by_bakery.entry(good.bakery_id).or_default().push(good);
    }

    let details = bakeries
        .into_iter()
        .map(|bakery| {
            let goods = goods_by_bakery.remove(&bakery.id).unwrap_or_default();
            bakery.with_baked_goods(goods)
        })
        .collect();

    Ok(Json(details))
}

// =========================================================================
// GET /bakeries/:id
// =========================================================================

/// Get bakery by ID
async fn get_bakery(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<BakeryDetail>> {
    let id = record_id(id)?;

    Ok(Json(bakery_detail(&pool, id).await?))
}

// =========================================================================
// PATCH /bakeries/:id
// =========================================================================

/// Update bakery. Only `name` is writable; every other field is ignored.
async fn update_bakery(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
    fields: FormFields,
) -> AppResult<Json<BakeryDetail>> {
    let id = record_id(id)?;
    let repository = BakeryRepository::new(pool.clone());

    repository.find_by_id(id).await?.ok_or(AppError::NotFound)?;

    if let Some(name) = fields.first("name") {
        if !repository.update_name(id, name).await? {
            return Err(AppError::NotFound);
        }
        tracing::info!(bakery_id = id, "Bakery renamed");
    }

    Ok(Json(bakery_detail(&pool, id).await?))
}

// =========================================================================
// GET /baked_goods
// =========================================================================

/// List all baked goods with their bakery
async fn list_baked_goods(
    State(pool): State<SqlitePool>,
) -> AppResult<Json<Vec<BakedGoodDetail>>> {
    let goods = BakedGoodRepository::new(pool).list_with_bakery().await?;

    Ok(Json(goods))
}

// =========================================================================
// POST /baked_goods
// =========================================================================

/// Create a baked good. `bakery_id` is not checked against existing bakeries.
async fn create_baked_good(
    State(pool): State<SqlitePool>,
    fields: FormFields,
) -> AppResult<(StatusCode, Json<BakedGoodDetail>)> {
    let new = NewBakedGood::parse(
        fields.first("name"),
        fields.first("price"),
        fields.first("bakery_id"),
    )?;

    let repository = BakedGoodRepository::new(pool);
    let good = repository.insert(&new).await?;

    let detail = repository
        .find_detail_by_id(good.id)
        .await?
        .ok_or_else(|| AppError::Internal(format!("Baked good {} vanished after insert", good.id)))?;

    tracing::info!(baked_good_id = good.id, bakery_id = good.bakery_id, "Baked good created");

    Ok((StatusCode::CREATED, Json(detail)))
}

// =========================================================================
// DELETE /baked_goods/:id
// =========================================================================

/// Delete a baked good permanently
async fn delete_baked_good(
    State(pool): State<SqlitePool>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<DeleteResponse>> {
    let id = record_id(id)?;
    let repository = BakedGoodRepository::new(pool);

    repository.find_by_id(id).await?.ok_or(AppError::NotFound)?;

    if !repository.delete(id).await? {
        return Err(AppError::NotFound);
    }

    tracing::info!(baked_good_id = id, "Baked good deleted");

    Ok(Json(DeleteResponse {
        delete_successful: true,
        message: "BakedGood deleted.",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_response_shape() {
        let value = serde_json::to_value(DeleteResponse {
            delete_successful: true,
            message: "BakedGood deleted.",
        })
        .unwrap();

        assert_eq!(
            value,
            serde_json::json!({"delete_successful": true, "message": "BakedGood deleted."})
        );
    }
}
