//! Partition-keyed storage for notification records.
//!
//! The store interface is exactly the two operations the service needs:
//! write one item and query one partition. Two backends implement it:
//!
//! - `MemoryStore`: In-memory storage using DashMap (default)
//! - `DynamoDbStore`: Amazon DynamoDB via the AWS SDK
//!
//! Use `create_store_backend()` to create the appropriate backend based
//! on configuration.

mod dynamodb;
mod item;
mod marshal;
mod memory;
pub mod schema;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::StoreConfig;

pub use dynamodb::DynamoDbStore;
pub use item::{Attribute, StoreItem};
pub use marshal::{marshal, MarshalError};
pub use memory::MemoryStore;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error raised by a store backend.
///
/// Request failures keep the backend's error as their source; the store
/// layer never retries or classifies them further.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{operation} failed on table {table}: {source}")]
    Request {
        operation: &'static str,
        table: String,
        #[source]
        source: BoxError,
    },

    #[error("Item is missing string partition key {key}")]
    MissingPartitionKey { key: &'static str },

    #[error("Unsupported stored type for attribute {attribute}")]
    UnsupportedAttribute { attribute: String },
}

impl StoreError {
    fn request(
        operation: &'static str,
        table: &str,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        StoreError::Request {
            operation,
            table: table.to_string(),
            source: Box::new(source),
        }
    }
}

/// Storage interface for notification records.
///
/// `put_item` writes one fresh record; a retried write with a new
/// identifier produces a duplicate logical record, and no backend
/// deduplicates. `query_by_partition` returns every record for a user in
/// whatever order the backend provides.
#[async_trait]
pub trait NotificationStore: Send + Sync {
    async fn put_item(&self, item: StoreItem) -> Result<(), StoreError>;

    async fn query_by_partition(&self, partition_key: &str) -> Result<Vec<StoreItem>, StoreError>;
}

/// Create a store backend based on configuration.
///
/// Returns the appropriate backend implementation based on the `backend`
/// setting:
/// - `"dynamodb"`: Returns a `DynamoDbStore` built from the shared AWS
///   configuration
/// - `"memory"` (default): Returns a `MemoryStore`
pub async fn create_store_backend(settings: &StoreConfig) -> Arc<dyn NotificationStore> {
    match settings.backend.as_str() {
        "dynamodb" => {
            tracing::info!(
                backend = "dynamodb",
                table = %settings.table_name,
                "Creating DynamoDB store backend"
            );
            Arc::new(DynamoDbStore::new(settings).await)
        }
        _ => {
            tracing::info!(backend = "memory", "Creating memory store backend");
            Arc::new(MemoryStore::new())
        }
    }
}
