//! Common test utilities

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header::CONTENT_TYPE, Request, Response};
use bakery_api::domain::NewBakedGood;
use bakery_api::repository::{BakedGoodRepository, BakeryRepository};
use bakery_api::{Bakery, BakedGood};
use serde_json::Value;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Setup test database - fresh in-memory schema per test
pub async fn setup_test_db() -> SqlitePool {
    // In-memory databases are per connection, so the pool holds exactly one.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory DB");

    bakery_api::db::init_schema(&pool)
        .await
        .expect("Failed to create schema");

    pool
}

pub async fn seed_bakery(pool: &SqlitePool, name: &str) -> Bakery {
    BakeryRepository::new(pool.clone())
        .insert(name)
        .await
        .expect("Failed to seed bakery")
}

pub async fn seed_baked_good(pool: &SqlitePool, name: &str, price: i64, bakery_id: i64) -> BakedGood {
    BakedGoodRepository::new(pool.clone())
        .insert(&NewBakedGood {
            name: Some(name.to_string()),
            price,
            bakery_id,
        })
        .await
        .expect("Failed to seed baked good")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn form(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}
