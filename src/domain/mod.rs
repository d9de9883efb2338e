//! Domain entities and value types of the product catalog.

pub mod product;
pub mod types;
