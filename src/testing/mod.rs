use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::database::models::{Product, User};
use crate::database::{ProductStore, StoreError, UserStore};
use crate::filter::{PageRequest, ProductPredicate, SortDirection};
use crate::AppState;

/// In-memory ProductStore mirroring the MongoDB semantics.
///
/// Filtering reuses `ProductPredicate::matches`, so the predicate's BSON
/// rendering and this evaluation are kept in agreement by the predicate's
/// own tests.
#[derive(Default)]
pub struct InMemoryProductStore {
    products: Mutex<Vec<Product>>,
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn insert(&self, product: Product) -> Result<Product, StoreError> {
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn find_page(
        &self,
        predicate: &ProductPredicate,
        page: &PageRequest,
    ) -> Result<Vec<Product>, StoreError> {
        let mut matching: Vec<Product> = self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| predicate.matches(p))
            .cloned()
            .collect();

        matching.sort_by(|a, b| match page.sort {
            SortDirection::Asc => a.price.total_cmp(&b.price),
            SortDirection::Desc => b.price.total_cmp(&a.price),
        });

        Ok(matching
            .into_iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .collect())
    }

    async fn count(&self, predicate: &ProductPredicate) -> Result<u64, StoreError> {
        let count = self
            .products
            .lock()
            .unwrap()
            .iter()
            .filter(|p| predicate.matches(p))
            .count();
        Ok(count as u64)
    }
}

impl InMemoryProductStore {
    /// Number of stored products, for asserting rejected writes
    pub fn len(&self) -> usize {
        self.products.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory UserStore keyed by email
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn insert(&self, user: User) -> Result<User, StoreError> {
        self.users.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned();
        Ok(user)
    }
}

impl InMemoryUserStore {
    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

/// Build an AppState backed by in-memory stores.
///
/// The MongoDB client is constructed lazily and never connects unless the
/// health endpoint is exercised, so router tests run without a database.
pub async fn test_state() -> (AppState, Arc<InMemoryUserStore>, Arc<InMemoryProductStore>) {
    let users = Arc::new(InMemoryUserStore::default());
    let products = Arc::new(InMemoryProductStore::default());

    let client = mongodb::Client::with_uri_str("mongodb://localhost:27017")
        .await
        .expect("lazy mongodb client");
    let db = client.database("gadgetShopTest");

    let state = AppState {
        db,
        users: users.clone(),
        products: products.clone(),
    };

    (state, users, products)
}
