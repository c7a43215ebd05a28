use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{Collection, Database};

use super::models::Product;
use super::StoreError;
use crate::filter::{PageRequest, ProductPredicate};

/// Data access interface for the `products` collection.
///
/// The listing path issues two independent reads (paged fetch and full
/// count); no snapshot consistency is provided between them.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a new product document
    async fn insert(&self, product: Product) -> Result<Product, StoreError>;

    /// Fetch one page of products matching the predicate, ordered by price
    async fn find_page(
        &self,
        predicate: &ProductPredicate,
        page: &PageRequest,
    ) -> Result<Vec<Product>, StoreError>;

    /// Count all products matching the predicate, unaffected by paging
    async fn count(&self, predicate: &ProductPredicate) -> Result<u64, StoreError>;
}

/// MongoDB implementation of the ProductStore
pub struct MongoProductStore {
    collection: Collection<Product>,
}

impl MongoProductStore {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<Product>("products");
        Self { collection }
    }
}

#[async_trait]
impl ProductStore for MongoProductStore {
    async fn insert(&self, product: Product) -> Result<Product, StoreError> {
        self.collection.insert_one(&product).await?;
        tracing::info!(product_id = %product.id, title = %product.title, "Product created");
        Ok(product)
    }

    async fn find_page(
        &self,
        predicate: &ProductPredicate,
        page: &PageRequest,
    ) -> Result<Vec<Product>, StoreError> {
        let options = mongodb::options::FindOptions::builder()
            .skip(page.skip)
            .limit(page.limit)
            .sort(page.sort.to_sort_document())
            .build();

        let cursor = self
            .collection
            .find(predicate.to_document())
            .with_options(options)
            .await?;
        let products: Vec<Product> = cursor.try_collect().await?;

        Ok(products)
    }

    async fn count(&self, predicate: &ProductPredicate) -> Result<u64, StoreError> {
        let count = self
            .collection
            .count_documents(predicate.to_document())
            .await?;
        Ok(count)
    }
}
