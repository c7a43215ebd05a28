pub mod manager;
pub mod models;
pub mod products;
pub mod users;

use thiserror::Error;

/// Errors from the document store layer
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),
}

pub use products::{MongoProductStore, ProductStore};
pub use users::{MongoUserStore, UserStore};
