//! Baked good records and creation input

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{Bakery, DomainError};

/// A baked good row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BakedGood {
    pub id: i64,
    pub name: Option<String>,
    pub price: i64,
    pub bakery_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl BakedGood {
    /// Attach the owning bakery (if it exists) for serialization
    pub fn with_bakery(self, bakery: Option<Bakery>) -> BakedGoodDetail {
        BakedGoodDetail {
            baked_good: self,
            bakery,
        }
    }
}

/// Serialized form of a baked good: its own fields plus its bakery.
///
/// `bakery` is null when `bakery_id` points at no row.
#[derive(Debug, Clone, Serialize)]
pub struct BakedGoodDetail {
    #[serde(flatten)]
    pub baked_good: BakedGood,
    pub bakery: Option<Bakery>,
}

/// Validated input for inserting a baked good
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBakedGood {
    pub name: Option<String>,
    pub price: i64,
    pub bakery_id: i64,
}

impl NewBakedGood {
    /// Build from raw submitted values. Both integers must be present and parse.
    pub fn parse(
        name: Option<&str>,
        price: Option<&str>,
        bakery_id: Option<&str>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            name: name.map(str::to_string),
            price: parse_integer("price", price)?,
            bakery_id: parse_integer("bakery_id", bakery_id)?,
        })
    }
}

/// Parse a submitted integer field.
///
/// Surrounding whitespace and a leading sign are accepted, as are single
/// underscores between digits (`1_000`).
pub fn parse_integer(field: &'static str, raw: Option<&str>) -> Result<i64, DomainError> {
    let raw = raw.ok_or(DomainError::MissingInteger { field })?;
    let invalid = || DomainError::InvalidInteger {
        field,
        value: raw.to_string(),
    };

    let trimmed = raw.trim();
    let (sign, digits) = match trimmed.strip_prefix(['+', '-']) {
        Some(rest) => (&trimmed[..1], rest),
        None => ("", trimmed),
    };

    if digits.is_empty()
        || digits.starts_with('_')
        || digits.ends_with('_')
        || digits.contains("__")
    {
        return Err(invalid());
    }

    let cleaned: String = digits.chars().filter(|c| *c != '_').collect();
    if !cleaned.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    format!("{sign}{cleaned}").parse().map_err(|_| invalid())
}
