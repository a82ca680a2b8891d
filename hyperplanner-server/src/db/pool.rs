//! MongoDB client creation
//!
//! The driver keeps its own connection pool inside `Client`, so one client
//! is created at startup and cloned into every handler.

use mongodb::bson::doc;
use mongodb::Client;

/// Default database name.
pub const DEFAULT_DATABASE: &str = "HyperPlanner";

/// Default collection name.
pub const DEFAULT_COLLECTION: &str = "Courses";

/// Where the course collection lives
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MongoDB connection string
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl StoreConfig {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

/// Create a MongoDB client and verify it with a `ping`.
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the
/// deployment cannot be reached.
///
/// # Example
///
/// ```ignore
/// let client = create_client("mongodb://localhost:27017").await?;
/// ```
pub async fn create_client(uri: &str) -> Result<Client, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;

    tracing::info!("connected to MongoDB");
    Ok(client)
}
