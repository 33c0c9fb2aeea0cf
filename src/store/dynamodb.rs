//! DynamoDB notification store backend.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;

use crate::config::StoreConfig;

use super::item::{Attribute, StoreItem};
use super::{NotificationStore, StoreError};

/// DynamoDB-backed notification store.
///
/// Writes go through `PutItem`; reads use `Query` with a `user_id` key
/// condition, following continuation keys until the partition is
/// exhausted.
pub struct DynamoDbStore {
    client: Client,
    table_name: String,
}

impl std::fmt::Debug for DynamoDbStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DynamoDbStore")
            .field("table_name", &self.table_name)
            .finish()
    }
}

impl DynamoDbStore {
    /// Create a store from the shared AWS configuration, applying the
    /// region, endpoint, and timeout overrides from settings.
    pub async fn new(config: &StoreConfig) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .load()
            .await;

        let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);

        if let Some(region) = &config.region {
            builder = builder.region(aws_sdk_dynamodb::config::Region::new(region.clone()));
        }

        // Endpoint override for local stacks (e.g. LocalStack)
        if let Some(endpoint) = &config.endpoint {
            builder = builder.endpoint_url(endpoint);
        }

        if let Some(timeout_ms) = config.timeout_ms {
            let timeout = aws_config::timeout::TimeoutConfig::builder()
                .operation_timeout(Duration::from_millis(timeout_ms))
                .build();
            builder = builder.timeout_config(timeout);
        }

        let client = Client::from_conf(builder.build());

        Self {
            client,
            table_name: config.table_name.clone(),
        }
    }

    /// Create from a pre-built client (for testing)
    pub fn from_client(client: Client, table_name: String) -> Self {
        Self { client, table_name }
    }

    fn to_wire(item: StoreItem) -> HashMap<String, AttributeValue> {
        item.into_iter()
            .map(|(name, attribute)| {
                let value = match attribute {
                    Attribute::S(s) => AttributeValue::S(s),
                    Attribute::N(n) => AttributeValue::N(n),
                    Attribute::Bool(b) => AttributeValue::Bool(b),
                };
                (name, value)
            })
            .collect()
    }

    /// Convert a fetched item back into tagged form.
    ///
    /// This service only ever writes S/N/BOOL attributes; anything else
    /// in the table is a foreign write and fails the read.
    fn from_wire(item: &HashMap<String, AttributeValue>) -> Result<StoreItem, StoreError> {
        item.iter()
            .map(|(name, value)| {
                let attribute = match value {
                    AttributeValue::S(s) => Attribute::S(s.clone()),
                    AttributeValue::N(n) => Attribute::N(n.clone()),
                    AttributeValue::Bool(b) => Attribute::Bool(*b),
                    _ => {
                        return Err(StoreError::UnsupportedAttribute {
                            attribute: name.clone(),
                        })
                    }
                };
                Ok((name.clone(), attribute))
            })
            .collect()
    }
}

#[async_trait]
impl NotificationStore for DynamoDbStore {
    async fn put_item(&self, item: StoreItem) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(Self::to_wire(item)))
            .send()
            .await
            .map_err(|e| StoreError::request("PutItem", &self.table_name, e))?;

        Ok(())
    }

    async fn query_by_partition(&self, partition_key: &str) -> Result<Vec<StoreItem>, StoreError> {
        let mut records = Vec::new();
        let mut last_evaluated_key = None;

        loop {
            let mut request = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("user_id = :user_id")
                .expression_attribute_values(
                    ":user_id",
                    AttributeValue::S(partition_key.to_string()),
                );

            if let Some(key) = last_evaluated_key.take() {
                request = request.set_exclusive_start_key(Some(key));
            }

            let response = request
                .send()
                .await
                .map_err(|e| StoreError::request("Query", &self.table_name, e))?;

            for item in response.items() {
                records.push(Self::from_wire(item)?);
            }

            match response.last_evaluated_key() {
                Some(key) if !key.is_empty() => {
                    last_evaluated_key = Some(key.clone());
                }
                _ => break,
            }
        }

        Ok(records)
    }
}
