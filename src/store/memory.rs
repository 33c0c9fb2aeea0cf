//! In-memory notification store backend using DashMap.
//!
//! Partition-keyed storage for development and tests. Records are lost
//! on service restart.

use async_trait::async_trait;
use dashmap::DashMap;

use super::item::StoreItem;
use super::schema::{ATTR_ID, ATTR_USER_ID};
use super::{NotificationStore, StoreError};

/// In-memory store backend.
///
/// Uses `DashMap` for concurrent access to per-user partitions. Each
/// partition keeps items in insertion order. Writing an item whose
/// `(user_id, id)` key already exists replaces the stored item, matching
/// the put semantics of the real table.
pub struct MemoryStore {
    /// Items grouped by partition key
    partitions: DashMap<String, Vec<StoreItem>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            partitions: DashMap::new(),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationStore for MemoryStore {
    async fn put_item(&self, item: StoreItem) -> Result<(), StoreError> {
        let user_id = item
            .get(ATTR_USER_ID)
            .and_then(|v| v.as_s())
            .ok_or(StoreError::MissingPartitionKey { key: ATTR_USER_ID })?
            .to_string();

        let id = item
            .get(ATTR_ID)
            .and_then(|v| v.as_s())
            .map(str::to_string);

        let mut partition = self.partitions.entry(user_id).or_default();

        if let Some(id) = &id {
            if let Some(existing) = partition
                .iter_mut()
                .find(|stored| stored.get(ATTR_ID).and_then(|v| v.as_s()) == Some(id))
            {
                *existing = item;
                return Ok(());
            }
        }

        partition.push(item);
        Ok(())
    }

    async fn query_by_partition(&self, partition_key: &str) -> Result<Vec<StoreItem>, StoreError> {
        Ok(self
            .partitions
            .get(partition_key)
            .map(|items| items.clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Attribute;

    fn test_item(user_id: &str, id: &str) -> StoreItem {
        let mut item = StoreItem::new();
        item.insert(ATTR_USER_ID.to_string(), Attribute::S(user_id.to_string()));
        item.insert(ATTR_ID.to_string(), Attribute::S(id.to_string()));
        item.insert("status".to_string(), Attribute::S("UNREAD".to_string()));
        item
    }

    #[tokio::test]
    async fn test_put_and_query() {
        let store = MemoryStore::new();

        store.put_item(test_item("user-1", "01A")).await.unwrap();
        store.put_item(test_item("user-1", "01B")).await.unwrap();

        let items = store.query_by_partition("user-1").await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0][ATTR_ID].as_s(), Some("01A"));
        assert_eq!(items[1][ATTR_ID].as_s(), Some("01B"));
    }

    #[tokio::test]
    async fn test_query_unknown_partition_is_empty() {
        let store = MemoryStore::new();

        let items = store.query_by_partition("nobody").await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn test_partitions_are_isolated() {
        let store = MemoryStore::new();

        store.put_item(test_item("user-1", "01A")).await.unwrap();
        store.put_item(test_item("user-2", "01B")).await.unwrap();

        let first = store.query_by_partition("user-1").await.unwrap();
        let second = store.query_by_partition("user-2").await.unwrap();
        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert_eq!(first[0][ATTR_USER_ID].as_s(), Some("user-1"));
    }

    #[tokio::test]
    async fn test_put_replaces_on_same_key() {
        let store = MemoryStore::new();

        store.put_item(test_item("user-1", "01A")).await.unwrap();

        let mut updated = test_item("user-1", "01A");
        updated.insert("status".to_string(), Attribute::S("READ".to_string()));
        store.put_item(updated).await.unwrap();

        let items = store.query_by_partition("user-1").await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["status"].as_s(), Some("READ"));
    }

    #[tokio::test]
    async fn test_put_without_partition_key_fails() {
        let store = MemoryStore::new();

        let mut item = StoreItem::new();
        item.insert(ATTR_ID.to_string(), Attribute::S("01A".to_string()));

        let err = store.put_item(item).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::MissingPartitionKey { key } if key == ATTR_USER_ID
        ));
    }

    #[tokio::test]
    async fn test_put_with_non_string_partition_key_fails() {
        let store = MemoryStore::new();

        let mut item = StoreItem::new();
        item.insert(ATTR_USER_ID.to_string(), Attribute::N("7".to_string()));
        item.insert(ATTR_ID.to_string(), Attribute::S("01A".to_string()));

        let err = store.put_item(item).await.unwrap_err();
        assert!(matches!(err, StoreError::MissingPartitionKey { .. }));
    }
}
