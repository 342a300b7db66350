//! Bakery records

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::BakedGood;

/// A bakery row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bakery {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Bakery {
    /// Attach the bakery's goods for serialization
    pub fn with_baked_goods(self, baked_goods: Vec<BakedGood>) -> BakeryDetail {
        BakeryDetail {
            bakery: self,
            baked_goods,
        }
    }
}

/// Serialized form of a bakery: its own fields plus the goods it owns.
///
/// Nested goods are plain [`BakedGood`]s, so they do not repeat the bakery.
#[derive(Debug, Clone, Serialize)]
pub struct BakeryDetail {
    #[serde(flatten)]
    pub bakery: Bakery,
    pub baked_goods: Vec<BakedGood>,
}
