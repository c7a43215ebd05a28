use async_trait::async_trait;
use mongodb::{bson::doc, Collection, Database};

use super::models::User;
use super::StoreError;

/// Data access interface for the `users` collection.
///
/// Kept behind a trait so handlers and middleware can run against a
/// substitutable in-memory store in tests.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user document
    async fn insert(&self, user: User) -> Result<User, StoreError>;

    /// Look up a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

/// MongoDB implementation of the UserStore
pub struct MongoUserStore {
    collection: Collection<User>,
}

impl MongoUserStore {
    pub fn new(db: &Database) -> Self {
        let collection = db.collection::<User>("users");
        Self { collection }
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert(&self, user: User) -> Result<User, StoreError> {
        self.collection.insert_one(&user).await?;
        tracing::info!(user_id = %user.id, email = %user.email, "User registered");
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let filter = doc! { "email": email };
        let user = self.collection.find_one(filter).await?;
        Ok(user)
    }
}
