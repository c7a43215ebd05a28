use mongodb::{bson::doc, Client, Database};
use tracing::info;

use super::StoreError;
use crate::config::DatabaseConfig;

/// Connect to MongoDB and return a handle to the configured database.
///
/// The returned `Database` is cheap to clone and safe for concurrent use;
/// one handle is created at startup and shared through `AppState`.
pub async fn connect(config: &DatabaseConfig) -> Result<Database, StoreError> {
    if config.uri.is_empty() {
        return Err(StoreError::ConfigMissing("MONGODB_URI"));
    }

    let client = Client::with_uri_str(&config.uri).await?;
    let database = client.database(&config.database);

    // Ping up front so startup fails loudly on a bad URI
    database.run_command(doc! { "ping": 1 }).await?;
    info!("Connected to MongoDB database: {}", config.database);

    Ok(database)
}

/// Pings the database to ensure connectivity
pub async fn health_check(database: &Database) -> Result<(), StoreError> {
    database.run_command(doc! { "ping": 1 }).await?;
    Ok(())
}
