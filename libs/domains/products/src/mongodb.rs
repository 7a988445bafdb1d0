//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use database::mongodb::{duplicate_key_message, ensure_unique_index};
use futures::{StreamExt, TryStreamExt};
use mongodb::{
    Collection, Database,
    bson::{Document, doc, oid::ObjectId},
    options::ReturnDocument,
};
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::{ProductRepository, ProductStream};

const COLLECTION: &str = "products";

/// MongoDB implementation of the ProductRepository
#[derive(Clone)]
pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    /// Create a new MongoProductRepository
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Product>(COLLECTION),
        }
    }

    /// Create the unique index on `code`. Idempotent.
    pub async fn init_indexes(&self) -> ProductResult<()> {
        ensure_unique_index(&self.collection, "code").await?;
        Ok(())
    }

    /// Build a `$set` document from the fields present in the update.
    fn set_document(input: &UpdateProduct) -> Document {
        let mut set = Document::new();

        if let Some(ref code) = input.code {
            set.insert("code", code.as_str());
        }
        if let Some(ref description) = input.description {
            set.insert("description", description.as_str());
        }
        if let Some(price) = input.price {
            set.insert("price", price);
        }
        if let Some(availability) = input.availability {
            set.insert("availability", availability);
        }
        if let Some(ref color) = input.color {
            set.insert("color", color.as_str());
        }
        if let Some(ref tags) = input.tags {
            set.insert("tags", tags.clone());
        }
        if let Some(ref images) = input.images {
            set.insert("images", images.clone());
        }

        set
    }

    fn map_write_error(err: mongodb::error::Error, code: Option<&str>) -> ProductError {
        match (duplicate_key_message(&err), code) {
            (Some(_), Some(code)) => ProductError::DuplicateCode(code.to_string()),
            _ => err.into(),
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, input), fields(code = %input.code))]
    async fn create(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input);

        self.collection
            .insert_one(&product)
            .await
            .map_err(|e| Self::map_write_error(e, Some(&product.code)))?;

        tracing::info!(product_id = %product.id, "Product created successfully");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ProductResult<ProductStream> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.map_err(ProductError::from).boxed())
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> ProductResult<Option<Product>> {
        let product = self.collection.find_one(doc! { "_id": id }).await?;
        Ok(product)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: ObjectId, input: UpdateProduct) -> ProductResult<Option<Product>> {
        let set = Self::set_document(&input);

        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| Self::map_write_error(e, input.code.as_deref()))?;

        if updated.is_some() {
            tracing::info!(product_id = %id, "Product updated successfully");
        }
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ObjectId) -> ProductResult<bool> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;

        if result.deleted_count > 0 {
            tracing::info!(product_id = %id, "Product deleted successfully");
        }
        Ok(result.deleted_count > 0)
    }
}
