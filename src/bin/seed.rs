//! Seed Tool
//!
//! Clears both tables and inserts demo bakeries with a few baked goods each.
//!
//! Run with: cargo run --bin seed -- --bakeries 3

use bakery_api::domain::NewBakedGood;
use bakery_api::repository::{BakedGoodRepository, BakeryRepository};
use bakery_api::{db, Config};
use rand::seq::SliceRandom;
use rand::Rng;

const BAKERY_NAMES: &[&str] = &[
    "Delightful donuts",
    "Incredible crullers",
    "Bread Basket",
    "Flour Power",
    "Rolling in Dough",
];

const BAKED_GOOD_NAMES: &[&str] = &[
    "Chocolate dipped donut",
    "Apple-spice filled donut",
    "Glazed honey cruller",
    "Chocolate cruller",
    "Sourdough loaf",
    "Cinnamon roll",
    "Almond croissant",
    "Blueberry muffin",
];

const GOODS_PER_BAKERY: usize = 3;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let bakery_count: usize = args
        .iter()
        .position(|a| a == "--bakeries")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
        .unwrap_or(2)
        .min(BAKERY_NAMES.len());

    let config = Config::from_env()?;

    println!("Seeding {} with {} bakeries", config.database_url, bakery_count);

    let pool = db::connect(&config).await?;
    db::init_schema(&pool).await?;

    let bakeries = BakeryRepository::new(pool.clone());
    let baked_goods = BakedGoodRepository::new(pool.clone());

    let removed_goods = baked_goods.delete_all().await?;
    let removed_bakeries = bakeries.delete_all().await?;
    println!("Removed {} bakeries and {} baked goods", removed_bakeries, removed_goods);

    let mut rng = rand::thread_rng();

    for name in BAKERY_NAMES.iter().take(bakery_count) {
        let bakery = bakeries.insert(name).await?;

        for good_name in BAKED_GOOD_NAMES.choose_multiple(&mut rng, GOODS_PER_BAKERY) {
            let good = NewBakedGood {
                name: Some(good_name.to_string()),
                price: rng.gen_range(1..=10),
                bakery_id: bakery.id,
            };
            baked_goods.insert(&good).await?;
        }

        println!("Seeded {} (id {})", bakery.name, bakery.id);
    }

    pool.close().await;
    println!("Done.");

    Ok(())
}
