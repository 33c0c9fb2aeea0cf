use std::sync::Arc;

use thiserror::Error;
use tokio::sync::broadcast;

use crate::store::{marshal, MarshalError, NotificationStore, StoreError, StoreItem};

use super::events::{CreatedEvents, RecordCreated};
use super::types::{CreateNotificationRequest, CreateNotificationResponse, NotificationRecord};

/// Errors surfaced by the notification service.
#[derive(Debug, Error)]
pub enum NotificationError {
    #[error("Marshal error: {0}")]
    Marshal(#[from] MarshalError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Failed to serialize additionalData: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Core read/write operations over per-user notification records.
pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
    events: CreatedEvents,
}

impl NotificationService {
    pub fn new(store: Arc<dyn NotificationStore>, events: CreatedEvents) -> Self {
        Self { store, events }
    }

    /// Fetch all stored records for a user, in storage form.
    ///
    /// Records come back oldest first because the sort key embeds the
    /// creation timestamp.
    #[tracing::instrument(
        name = "notification.get",
        skip(self),
        fields(user_id = %user_id)
    )]
    pub async fn get_notifications(&self, user_id: &str) -> Result<Vec<StoreItem>, StoreError> {
        let items = self.store.query_by_partition(user_id).await?;

        tracing::info!(
            user_id = %user_id,
            count = items.len(),
            "Found notifications"
        );

        Ok(items)
    }

    /// Build a record from the request and write it to the store.
    ///
    /// Failures surface only through the error; the success body never
    /// carries a flag other than `isCreated: true`.
    #[tracing::instrument(
        name = "notification.create",
        skip(self, request),
        fields(user_id = %request.user_id, category = %request.category)
    )]
    pub async fn create_notification(
        &self,
        request: CreateNotificationRequest,
    ) -> Result<CreateNotificationResponse, NotificationError> {
        let record = NotificationRecord::from_request(request)?;
        let item = marshal(&record.to_fields())?;

        self.store.put_item(item).await?;

        tracing::info!(
            notification_id = %record.id,
            user_id = %record.user_id,
            severity = record.severity.as_str(),
            "Notification record created"
        );
        self.events.publish(&record);

        Ok(CreateNotificationResponse { is_created: true })
    }

    /// Subscribe to record-created events.
    pub fn subscribe_created(&self) -> broadcast::Receiver<RecordCreated> {
        self.events.subscribe()
    }
}
