use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product document stored in the `products` collection.
///
/// Listing filters operate on `title`, `category` and `brand`; paging sorts
/// on `price`. Sellers may attach arbitrary additional fields (images,
/// descriptions, stock counts), carried in the flattened `extra` map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// DTO for creating a new product
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub category: String,
    pub brand: String,
    pub price: f64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Product {
    /// Create a new product document from a creation request
    pub fn new(input: NewProduct) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: input.title,
            category: input.category,
            brand: input.brand,
            price: input.price,
            extra: input.extra,
        }
    }
}
