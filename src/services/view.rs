//! Visibility rules for the two catalog audiences.

use crate::repository::ProductListQuery;

/// Which audience a listing is produced for.
///
/// This is a convention between the caller and the service, not an access
/// control boundary: no credentials distinguish the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogView {
    /// Shoppers only ever see active products.
    Storefront,
    /// Operators see every product unless they filter explicitly.
    #[default]
    Admin,
}

impl CatalogView {
    /// Restrict `query` to what this audience may see.
    pub fn apply(self, query: ProductListQuery) -> ProductListQuery {
        match self {
            Self::Storefront => query.active(true),
            Self::Admin => query,
        }
    }
}
