//! Product Service - Business logic layer

use futures::stream::{BoxStream, StreamExt, TryStreamExt};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, ProductResponse, UpdateProduct};
use crate::repository::ProductRepository;

/// Product service providing business logic operations
///
/// Validates input, rejects empty updates before they reach the store, and
/// reshapes stored documents into their output form.
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new product
    #[instrument(skip(self, input), fields(code = %input.code))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<ProductResponse> {
        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        let product = self.repository.create(input).await?;
        Ok(product.into())
    }

    /// Stream all products in output form
    #[instrument(skip(self))]
    pub async fn list_products(
        &self,
    ) -> ProductResult<BoxStream<'static, ProductResult<ProductResponse>>> {
        let products = self.repository.list().await?;
        Ok(products.map_ok(ProductResponse::from).boxed())
    }

    /// Get a product by ID
    #[instrument(skip(self))]
    pub async fn get_product(&self, id: ObjectId) -> ProductResult<ProductResponse> {
        self.repository
            .get_by_id(id)
            .await?
            .map(ProductResponse::from)
            .ok_or(ProductError::NotFound(id))
    }

    /// Update the supplied fields of a product
    #[instrument(skip(self, input))]
    pub async fn update_product(
        &self,
        id: ObjectId,
        input: UpdateProduct,
    ) -> ProductResult<ProductResponse> {
        if input.is_empty() {
            return Err(ProductError::EmptyUpdate);
        }

        input
            .validate()
            .map_err(|e| ProductError::Validation(e.to_string()))?;

        self.repository
            .update(id, input)
            .await?
            .map(ProductResponse::from)
            .ok_or(ProductError::NotFound(id))
    }

    /// Delete a product
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ObjectId) -> ProductResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ProductError::NotFound(id))
        }
    }
}
