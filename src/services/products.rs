use crate::domain::product::ProductPatch;
use crate::domain::types::ProductId;
use crate::dto::products::{DeletedProductDto, ProductDto};
use crate::forms::products::{CreateProductPayload, ProductsQueryParams, UpdateProductForm};
use crate::repository::{
    ProductListQuery, ProductReader, ProductWriter, RepositoryError,
};
use crate::services::view::CatalogView;

use super::{ServiceError, ServiceResult};

/// Parse a path segment into a product id.
///
/// The whole segment must be an integer: `"12abc"` is rejected as
/// [`ServiceError::InvalidId`] rather than read as `12`. Integers that can
/// never name a product (zero or negative) are reported as not found.
fn parse_product_id(raw: &str) -> ServiceResult<ProductId> {
    let value = raw
        .trim()
        .parse::<i32>()
        .map_err(|_| ServiceError::InvalidId(raw.to_string()))?;
    ProductId::new(value).map_err(|_| ServiceError::NotFound)
}

/// Translate listing query parameters into a store predicate.
///
/// The category is matched exactly as sent; only an empty value is dropped.
pub fn build_list_query(params: &ProductsQueryParams) -> ProductListQuery {
    let mut query = ProductListQuery::default();
    if let Some(category) = params.category.as_deref().filter(|c| !c.is_empty()) {
        query = query.category(category);
    }
    if let Some(is_active) = params.active_flag() {
        query = query.active(is_active);
    }
    query
}

/// Persists a validated product and returns it with its assigned id.
pub fn create_product<R>(payload: CreateProductPayload, repo: &R) -> ServiceResult<ProductDto>
where
    R: ProductWriter,
{
    match repo.create_product(&payload.into_new_product()) {
        Ok(product) => {
            log::info!("Created product {}", product.id);
            Ok(product.into())
        }
        Err(e) => {
            log::error!("Failed to create product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Lists products visible to `view`, newest first.
pub fn list_products<R>(
    params: &ProductsQueryParams,
    view: CatalogView,
    repo: &R,
) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader,
{
    let query = view.apply(build_list_query(params));

    match repo.list_products(query) {
        Ok(products) => Ok(products.into_iter().map(ProductDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn get_product<R>(product_id: &str, repo: &R) -> ServiceResult<ProductDto>
where
    R: ProductReader,
{
    let product_id = parse_product_id(product_id)?;

    match repo.get_product_by_id(product_id) {
        Ok(Some(product)) => Ok(product.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Applies the fields present in `form` to an existing product.
///
/// The id is parsed first, then the product must exist, and only then is the
/// body validated.
pub fn update_product<R>(
    product_id: &str,
    form: UpdateProductForm,
    repo: &R,
) -> ServiceResult<ProductDto>
where
    R: ProductReader + ProductWriter,
{
    let product_id = parse_product_id(product_id)?;

    match repo.get_product_by_id(product_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Internal);
        }
    }

    let patch = ProductPatch::try_from(form)?;

    match repo.update_product(product_id, &patch) {
        Ok(product) => Ok(product.into()),
        // Deleted between the lookup and the update.
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_product<R>(product_id: &str, repo: &R) -> ServiceResult<DeletedProductDto>
where
    R: ProductReader + ProductWriter,
{
    let product_id = parse_product_id(product_id)?;

    match repo.get_product_by_id(product_id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(ServiceError::Internal);
        }
    }

    match repo.delete_product(product_id) {
        Ok(()) => {
            log::info!("Deleted product {product_id}");
            Ok(product_id.into())
        }
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to delete product {product_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
