//! Course repository backed by a MongoDB collection
//!
//! - insert: `insertMany`, ordered, not transactional
//! - find: equality filter document, cursor drained into memory

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Bson, Document};
use mongodb::error::ErrorKind;
use mongodb::{Client, Collection};

use hyperplanner_core::{Course, CourseFilter, CourseStore, FilterValue, StoreError};

use crate::db::pool::{create_client, StoreConfig};

/// Translate a course filter into a MongoDB query document.
///
/// Text constraints become strings, `credits` a double. An empty filter
/// yields an empty document, which matches every course.
pub fn filter_document(filter: &CourseFilter) -> Document {
    let mut document = Document::new();
    for (field, value) in filter.iter() {
        let value = match value {
            FilterValue::Text(text) => Bson::String(text.clone()),
            FilterValue::Number(number) => Bson::Double(*number),
        };
        document.insert(field.as_str(), value);
    }
    document
}

/// Course store over one collection
#[derive(Clone)]
pub struct MongoCourseStore {
    client: Client,
    collection: Collection<Course>,
}

impl MongoCourseStore {
    /// Connect, ping, and bind to the configured collection.
    pub async fn connect(config: &StoreConfig) -> Result<Self, StoreError> {
        let client = create_client(&config.uri)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "course store ready"
        );
        Ok(Self::from_client(client, &config.database, &config.collection))
    }

    pub fn from_client(client: Client, database: &str, collection: &str) -> Self {
        let collection = client.database(database).collection::<Course>(collection);
        Self { client, collection }
    }

    /// Close the client's pooled connections. Best effort.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
        tracing::info!("course store closed");
    }
}

#[async_trait]
impl CourseStore for MongoCourseStore {
    async fn insert_many(&self, courses: &[Course]) -> Result<usize, StoreError> {
        // The driver rejects an empty batch
        if courses.is_empty() {
            return Ok(0);
        }

        let result = self
            .collection
            .insert_many(courses)
            .await
            .map_err(write_error)?;

        tracing::debug!(inserted = result.inserted_ids.len(), "insert_many complete");
        Ok(result.inserted_ids.len())
    }

    async fn find_by_filter(&self, filter: &CourseFilter) -> Result<Vec<Course>, StoreError> {
        let cursor = self
            .collection
            .find(filter_document(filter))
            .await
            .map_err(|e| StoreError::Read(e.to_string()))?;

        let courses: Vec<Course> = cursor.try_collect().await.map_err(read_error)?;

        tracing::debug!(count = courses.len(), "find complete");
        Ok(courses)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .map_err(|e| StoreError::Connection(e.to_string()))
    }
}

/// Ordered inserts stop at the first failing document, so the lowest
/// failing index is the number that committed.
fn write_error(err: mongodb::error::Error) -> StoreError {
    let inserted = match err.kind.as_ref() {
        ErrorKind::InsertMany(failure) => failure
            .write_errors
            .as_ref()
            .and_then(|errors| errors.iter().map(|e| e.index).min()),
        _ => None,
    };
    StoreError::Write {
        inserted,
        message: err.to_string(),
    }
}

fn read_error(err: mongodb::error::Error) -> StoreError {
    match err.kind.as_ref() {
        ErrorKind::BsonDeserialization(_) => StoreError::Decode(err.to_string()),
        _ => StoreError::Read(err.to_string()),
    }
}
