use std::sync::Arc;

use mongodb::Database;

use crate::database::{MongoProductStore, MongoUserStore, ProductStore, UserStore};

/// Shared application state passed to every handler via axum `State`.
///
/// Store handles sit behind trait objects so tests can substitute in-memory
/// implementations; the raw `Database` handle is kept for health checks.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub users: Arc<dyn UserStore>,
    pub products: Arc<dyn ProductStore>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        let users = Arc::new(MongoUserStore::new(&db));
        let products = Arc::new(MongoProductStore::new(&db));
        Self {
            db,
            users,
            products,
        }
    }
}
