use crate::db::{DbConnection, DbPool};
use crate::domain::product::{NewProduct, Product, ProductPatch};
use crate::domain::types::ProductId;

pub mod errors;
pub mod product;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Filter applied when listing products.
///
/// Every present criterion must match; an empty query matches every product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListQuery {
    /// Exact, case-sensitive category match. The text is compared as given.
    pub category: Option<String>,
    /// Restrict to active or hidden products.
    pub is_active: Option<bool>,
}

impl ProductListQuery {
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Read-only operations for product entities.
pub trait ProductReader {
    /// List products matching `query`, most recently created first.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<Vec<Product>>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product entities.
pub trait ProductWriter {
    /// Persist a new product and return it with its assigned id.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Apply the present fields of `patch`. Fails with [`RepositoryError::NotFound`]
    /// when no product has `id`.
    fn update_product(&self, id: ProductId, patch: &ProductPatch) -> RepositoryResult<Product>;
    /// Permanently remove a product. Fails with [`RepositoryError::NotFound`]
    /// when no product has `id`.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<()>;
}
