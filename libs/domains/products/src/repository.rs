use async_trait::async_trait;
use futures::stream::BoxStream;
use mongodb::bson::oid::ObjectId;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};

/// Lazy sequence of stored products, in store-native order.
pub type ProductStream = BoxStream<'static, ProductResult<Product>>;

/// Repository trait for Product persistence
///
/// Uniqueness of `code` is enforced by the store; implementations report a
/// clash as `ProductError::DuplicateCode`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product
    async fn create(&self, input: CreateProduct) -> ProductResult<Product>;

    /// Stream every product; each call issues a fresh query
    async fn list(&self) -> ProductResult<ProductStream>;

    /// Get a product by ID
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>>;

    /// Apply the supplied fields and return the post-update document, or
    /// `None` when no product has this id
    async fn update(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Option<Product>>;

    /// Delete a product by ID, returning whether one was removed
    async fn delete(&self, id: ObjectId) -> ProductResult<bool>;
}
