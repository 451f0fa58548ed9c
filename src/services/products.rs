//! Business logic behind the `/api/products` endpoints.
//!
//! Every function validates its input, performs exactly one repository call
//! and translates the outcome into a [`ServiceResult`]. Repository failures
//! are logged here and reduced to [`ServiceError::Internal`] so that HTTP
//! routes can remain thin wrappers.

use crate::domain::product::{NewProduct, ProductUpdate};
use crate::domain::types::ProductId;
use crate::dto::products::ProductDto;
use crate::forms::products::{CreateProductForm, UpdateProductForm};
use crate::repository::{ProductReader, ProductWriter};
use log::error;

use super::{ServiceError, ServiceResult};

/// Validate the submitted fields and persist a new product.
///
/// Nothing is written when validation fails.
pub fn create_product<R>(form: CreateProductForm, repo: &R) -> ServiceResult<ProductDto>
where
    R: ProductWriter,
{
    let product: NewProduct = form.try_into()?;

    match repo.create_product(&product) {
        Ok(created) => Ok(created.into()),
        Err(e) => {
            error!("Failed to create product: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Return every stored product in store order.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<ProductDto>>
where
    R: ProductReader,
{
    match repo.list_products() {
        Ok(products) => Ok(products.into_iter().map(ProductDto::from).collect()),
        Err(e) => {
            error!("Failed to list products: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Look up a single product by the raw identifier taken from the request path.
pub fn get_product<R>(raw_id: &str, repo: &R) -> ServiceResult<ProductDto>
where
    R: ProductReader,
{
    let id: ProductId = raw_id.parse()?;

    match repo.get_product_by_id(id) {
        Ok(Some(product)) => Ok(product.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            error!("Failed to get product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Replace the supplied fields of an existing product.
///
/// The update is validated before the store is touched, so an invalid request
/// never results in a partial write.
pub fn update_product<R>(
    raw_id: &str,
    form: UpdateProductForm,
    repo: &R,
) -> ServiceResult<ProductDto>
where
    R: ProductWriter,
{
    let id: ProductId = raw_id.parse()?;
    let update: ProductUpdate = form.try_into()?;

    match repo.update_product(id, &update) {
        Ok(Some(product)) => Ok(product.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            error!("Failed to update product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Permanently remove a product.
pub fn delete_product<R>(raw_id: &str, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let id: ProductId = raw_id.parse()?;

    match repo.delete_product(id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            error!("Failed to delete product {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}
