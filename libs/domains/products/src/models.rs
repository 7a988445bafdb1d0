use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidateUrl, ValidationError};

/// Product entity as stored in the `products` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// Catalogue code, unique across products
    pub code: String,
    pub description: String,
    pub price: f64,
    #[serde(default = "default_availability")]
    pub availability: bool,
    pub color: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Image URLs
    #[serde(default)]
    pub images: Vec<String>,
}

/// Product as returned to clients, with the id as a hex string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductResponse {
    #[schema(example = "665f1c2ab2d4e1a9c0f3b7aa")]
    pub id: String,
    #[schema(example = "A1")]
    pub code: String,
    pub description: String,
    #[schema(example = 25.0)]
    pub price: f64,
    pub availability: bool,
    pub color: String,
    pub tags: Vec<String>,
    pub images: Vec<String>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1))]
    pub code: String,
    pub description: String,
    /// Must be strictly positive
    #[validate(range(exclusive_min = 0.0))]
    pub price: f64,
    #[serde(default = "default_availability")]
    pub availability: bool,
    pub color: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    #[validate(custom(function = "validate_image_urls"))]
    pub images: Vec<String>,
}

/// DTO for partially updating a product.
///
/// Absent and `null` fields are both left untouched, so a field cannot be
/// cleared through an update.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[validate(length(min = 1))]
    pub code: Option<String>,
    pub description: Option<String>,
    /// Not held to the create-time `> 0` rule
    pub price: Option<f64>,
    pub availability: Option<bool>,
    pub color: Option<String>,
    pub tags: Option<Vec<String>>,
    #[validate(custom(function = "validate_image_urls"))]
    pub images: Option<Vec<String>>,
}

fn default_availability() -> bool {
    true
}

#[allow(clippy::ptr_arg)]
fn validate_image_urls(images: &Vec<String>) -> Result<(), ValidationError> {
    if images.iter().all(|url| url.validate_url()) {
        Ok(())
    } else {
        Err(ValidationError::new("url").with_message("every image must be a valid URL".into()))
    }
}

impl Product {
    /// Create a new product from CreateProduct DTO
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: ObjectId::new(),
            code: input.code,
            description: input.description,
            price: input.price,
            availability: input.availability,
            color: input.color,
            tags: input.tags,
            images: input.images,
        }
    }

    /// Apply updates from UpdateProduct DTO
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(code) = update.code {
            self.code = code;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(availability) = update.availability {
            self.availability = availability;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(images) = update.images {
            self.images = images;
        }
    }
}

impl UpdateProduct {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.code.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.availability.is_none()
            && self.color.is_none()
            && self.tags.is_none()
            && self.images.is_none()
    }
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_hex(),
            code: product.code,
            description: product.description,
            price: product.price,
            availability: product.availability,
            color: product.color,
            tags: product.tags,
            images: product.images,
        }
    }
}
