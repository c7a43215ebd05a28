use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role value that grants access to product creation
pub const SELLER_ROLE: &str = "seller";

/// User document stored in the `users` collection.
///
/// `email` is the unique lookup key. Beyond the typed fields, registration
/// bodies may carry arbitrary profile fields; those are kept verbatim via
/// the flattened `extra` map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// DTO for registering a new user
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    /// Create a new user document from a registration request
    pub fn new(input: NewUser) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: input.email,
            role: input.role,
            extra: input.extra,
        }
    }

    /// Whether the stored role grants write access to the product catalog
    pub fn is_seller(&self) -> bool {
        self.role.as_deref() == Some(SELLER_ROLE)
    }
}
