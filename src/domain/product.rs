use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryName, ImageUrl, ProductDescription, ProductId, ProductName, ProductPrice, ProductStock,
};

/// A catalog entry as persisted by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: ProductName,
    pub description: ProductDescription,
    pub price: ProductPrice,
    pub stock: ProductStock,
    pub image_url: Option<ImageUrl>,
    pub category: CategoryName,
    /// Only active products are shown in the storefront.
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Information required to create a new [`Product`]. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: ProductName,
    pub description: ProductDescription,
    pub price: ProductPrice,
    pub stock: ProductStock,
    pub image_url: Option<ImageUrl>,
    pub category: CategoryName,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl NewProduct {
    /// Materialize the record the store would hold under `id`.
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            image_url: self.image_url,
            category: self.category,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}

/// Partial update of a [`Product`].
///
/// `None` leaves the stored value untouched. For `image_url`, `Some(None)`
/// clears the image.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<ProductName>,
    pub description: Option<ProductDescription>,
    pub price: Option<ProductPrice>,
    pub stock: Option<ProductStock>,
    pub image_url: Option<Option<ImageUrl>>,
    pub category: Option<CategoryName>,
    pub is_active: Option<bool>,
}

impl ProductPatch {
    /// `true` when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.stock.is_none()
            && self.image_url.is_none()
            && self.category.is_none()
            && self.is_active.is_none()
    }

    pub fn apply_to(&self, product: &mut Product) {
        if let Some(name) = &self.name {
            product.name = name.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = self.price {
            product.price = price;
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
        if let Some(image_url) = &self.image_url {
            product.image_url = image_url.clone();
        }
        if let Some(category) = &self.category {
            product.category = category.clone();
        }
        if let Some(is_active) = self.is_active {
            product.is_active = is_active;
        }
    }
}
