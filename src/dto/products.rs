use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::product::Product;
use crate::domain::types::ProductId;

/// JSON representation of a product returned by the REST API.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub image_url: Option<String>,
    pub category: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Product> for ProductDto {
    fn from(value: Product) -> Self {
        Self {
            id: value.id.get(),
            name: value.name.into_inner(),
            description: value.description.into_inner(),
            price: value.price.get(),
            stock: value.stock.get(),
            image_url: value.image_url.map(Into::into),
            category: value.category.into_inner(),
            is_active: value.is_active,
            created_at: value.created_at.and_utc(),
        }
    }
}

/// Confirmation body returned after a product is deleted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeletedProductDto {
    pub message: &'static str,
    pub id: i32,
}

impl From<ProductId> for DeletedProductDto {
    fn from(id: ProductId) -> Self {
        Self {
            message: "Product deleted successfully",
            id: id.get(),
        }
    }
}
