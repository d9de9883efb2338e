use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductPatch,
};
use crate::domain::types::{
    CategoryName, ImageUrl, ProductDescription, ProductName, ProductPrice, ProductStock,
    TypeConstraintError,
};

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub image_url: Option<String>,
    pub category: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Product`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub image_url: Option<String>,
    pub category: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

/// Changeset for partial updates; `None` fields are left out of the `SET` clause.
#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct ProductChangeset {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub image_url: Option<Option<String>>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            name: ProductName::new(product.name)?,
            description: ProductDescription::new(product.description)?,
            price: ProductPrice::new(product.price)?,
            stock: ProductStock::new(product.stock)?,
            // Blank legacy values read back as "no image".
            image_url: product.image_url.and_then(|url| ImageUrl::new(url).ok()),
            category: CategoryName::new(product.category)?,
            is_active: product.is_active,
            created_at: product.created_at,
        })
    }
}

impl From<DomainNewProduct> for NewProduct {
    fn from(product: DomainNewProduct) -> Self {
        Self {
            name: product.name.into_inner(),
            description: product.description.into_inner(),
            price: product.price.get(),
            stock: product.stock.get(),
            image_url: product.image_url.map(ImageUrl::into_inner),
            category: product.category.into_inner(),
            is_active: product.is_active,
            created_at: product.created_at,
        }
    }
}

impl From<ProductPatch> for ProductChangeset {
    fn from(patch: ProductPatch) -> Self {
        Self {
            name: patch.name.map(ProductName::into_inner),
            description: patch.description.map(ProductDescription::into_inner),
            price: patch.price.map(ProductPrice::get),
            stock: patch.stock.map(ProductStock::get),
            image_url: patch.image_url.map(|url| url.map(ImageUrl::into_inner)),
            category: patch.category.map(CategoryName::into_inner),
            is_active: patch.is_active,
        }
    }
}
