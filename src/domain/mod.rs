//! Domain module
//!
//! Bakery records and the shapes they serialize to.

pub mod baked_good;
pub mod bakery;
pub mod error;

pub use baked_good::{parse_integer, BakedGood, BakedGoodDetail, NewBakedGood};
pub use bakery::{Bakery, BakeryDetail};
pub use error::DomainError;
